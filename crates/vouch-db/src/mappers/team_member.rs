//! TeamMember entity <-> model mapper

use vouch_core::{DomainError, TeamMember};

use crate::models::TeamMemberModel;

/// Role labels are stored as text; rows with an unrecognized label are
/// surfaced as a domain error rather than silently coerced.
impl TryFrom<TeamMemberModel> for TeamMember {
    type Error = DomainError;

    fn try_from(model: TeamMemberModel) -> Result<Self, Self::Error> {
        let role = model.role.parse()?;
        Ok(TeamMember {
            user_id: model.user_id,
            username: model.username,
            avatar_url: model.avatar_url,
            role,
            display_order: model.display_order,
            updated_at: model.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use vouch_core::TeamRole;

    #[test]
    fn test_maps_legacy_role_label() {
        let model = TeamMemberModel {
            user_id: "1".to_string(),
            username: "alexx".to_string(),
            avatar_url: None,
            role: "early_supporter".to_string(),
            display_order: 3,
            updated_at: Utc::now(),
        };
        let member = TeamMember::try_from(model).unwrap();
        assert_eq!(member.role, TeamRole::EarlySupporter);
    }

    #[test]
    fn test_rejects_unknown_role() {
        let model = TeamMemberModel {
            user_id: "1".to_string(),
            username: "alexx".to_string(),
            avatar_url: None,
            role: "Janitor".to_string(),
            display_order: 0,
            updated_at: Utc::now(),
        };
        assert!(TeamMember::try_from(model).is_err());
    }
}
