//! Request DTOs for API endpoints

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Team Ingest Requests
// ============================================================================

/// Roster push from the community bot
///
/// Wire shape: `{ "type": ..., "data": ..., "token": ... }`. The token is a
/// shared secret checked against configuration before anything is applied.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TeamIngestRequest {
    #[validate(length(min = 1, message = "Token must not be empty"))]
    pub token: String,

    #[serde(flatten)]
    pub payload: TeamIngestPayload,
}

/// Ingest payload variants, tagged by `type`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum TeamIngestPayload {
    /// Upsert a single roster entry
    TeamMember(TeamMemberData),
    /// Replace the whole early-supporter set
    EarlySupporters(EarlySupportersData),
}

/// One roster entry as sent by the bot
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberData {
    #[validate(length(min = 1, message = "User id must not be empty"))]
    pub user_id: String,

    #[validate(length(min = 1, max = 100, message = "Username must be 1-100 characters"))]
    pub username: String,

    pub avatar_url: Option<String>,

    /// Role label; accepts both display and snake_case spellings
    #[serde(default)]
    pub role: Option<String>,

    /// Roster position, defaults to the end
    #[serde(default)]
    pub display_order: i32,
}

/// Bulk early-supporter replacement
#[derive(Debug, Clone, Deserialize)]
pub struct EarlySupportersData {
    pub members: Vec<TeamMemberData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_team_member_ingest() {
        let raw = r#"{
            "type": "team_member",
            "token": "secret",
            "data": {
                "userId": "643480211421265930",
                "username": "rex.f",
                "avatarUrl": null,
                "role": "Owner"
            }
        }"#;
        let request: TeamIngestRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.token, "secret");
        match request.payload {
            TeamIngestPayload::TeamMember(data) => {
                assert_eq!(data.user_id, "643480211421265930");
                assert_eq!(data.role.as_deref(), Some("Owner"));
                assert_eq!(data.display_order, 0);
            }
            TeamIngestPayload::EarlySupporters(_) => panic!("wrong variant"),
        }
    }

    #[test]
    fn test_deserialize_early_supporters_ingest() {
        let raw = r#"{
            "type": "early_supporters",
            "token": "secret",
            "data": {
                "members": [
                    { "userId": "1", "username": "a" },
                    { "userId": "2", "username": "b" }
                ]
            }
        }"#;
        let request: TeamIngestRequest = serde_json::from_str(raw).unwrap();
        match request.payload {
            TeamIngestPayload::EarlySupporters(data) => assert_eq!(data.members.len(), 2),
            TeamIngestPayload::TeamMember(_) => panic!("wrong variant"),
        }
    }

    #[test]
    fn test_validation_rejects_empty_token() {
        let raw = r#"{
            "type": "team_member",
            "token": "",
            "data": { "userId": "1", "username": "a" }
        }"#;
        let request: TeamIngestRequest = serde_json::from_str(raw).unwrap();
        assert!(request.validate().is_err());
    }
}
