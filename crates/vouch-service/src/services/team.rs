//! Team service
//!
//! Serves the grouped staff roster and applies roster pushes from the bot.

use std::collections::HashSet;

use tracing::{info, instrument};
use validator::Validate;
use vouch_core::{DomainError, TeamMember, TeamRole};

use crate::dto::requests::{TeamIngestPayload, TeamMemberData};
use crate::dto::TeamResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Team service
pub struct TeamService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TeamService<'a> {
    /// Create a new TeamService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the full roster grouped by role.
    #[instrument(skip(self))]
    pub async fn get_roster(&self) -> ServiceResult<TeamResponse> {
        let members = self.ctx.team_repo().list_all().await?;
        Ok(Self::group_roster(members))
    }

    /// Group roster entries by role.
    ///
    /// A user id present in any core role is dropped from the early-support
    /// group, so a promotion never shows the same person twice.
    fn group_roster(members: Vec<TeamMember>) -> TeamResponse {
        let core_ids: HashSet<String> = members
            .iter()
            .filter(|m| m.is_core_team())
            .map(|m| m.user_id.clone())
            .collect();

        let mut roster = TeamResponse::default();
        for member in members {
            match member.role {
                TeamRole::Founder => roster.founder.push(member.into()),
                TeamRole::Owner => roster.owners.push(member.into()),
                TeamRole::GirlOwner => roster.girl_owners.push(member.into()),
                TeamRole::Manager => roster.managers.push(member.into()),
                TeamRole::EarlySupporter => {
                    if !core_ids.contains(&member.user_id) {
                        roster.early_support.push(member.into());
                    }
                }
            }
        }

        roster
    }

    /// Apply a roster push from the bot.
    ///
    /// The caller has already checked the shared token; this only validates
    /// and persists. `team_member` upserts a single entry, `early_supporters`
    /// atomically replaces the whole early-supporter set.
    #[instrument(skip(self, payload))]
    pub async fn ingest(&self, payload: TeamIngestPayload) -> ServiceResult<()> {
        match payload {
            TeamIngestPayload::TeamMember(data) => {
                let member = Self::to_entity(data, None)?;
                self.ctx.team_repo().upsert(&member).await?;
                info!(user_id = %member.user_id, role = %member.role, "Upserted team member");
            }
            TeamIngestPayload::EarlySupporters(data) => {
                let members = data
                    .members
                    .into_iter()
                    .enumerate()
                    .map(|(i, m)| Self::to_entity(m, Some(i as i32)))
                    .collect::<ServiceResult<Vec<_>>>()?;
                self.ctx
                    .team_repo()
                    .replace_role(TeamRole::EarlySupporter, &members)
                    .await?;
                info!(count = members.len(), "Replaced early supporters");
            }
        }
        Ok(())
    }

    /// Validate and convert one wire entry.
    ///
    /// `forced_order` overrides the entry's own order; the bulk path uses the
    /// list position so the bot's ordering is preserved. Entries without a
    /// role default to early supporter.
    fn to_entity(data: TeamMemberData, forced_order: Option<i32>) -> ServiceResult<TeamMember> {
        data.validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let role = match data.role.as_deref() {
            Some(label) => label
                .parse::<TeamRole>()
                .map_err(DomainError::from)
                .map_err(ServiceError::from)?,
            None => TeamRole::EarlySupporter,
        };

        let mut member = TeamMember::new(data.user_id, data.username, data.avatar_url, role);
        member.display_order = forced_order.unwrap_or(data.display_order);
        Ok(member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(role: Option<&str>) -> TeamMemberData {
        TeamMemberData {
            user_id: "1".to_string(),
            username: "rex.f".to_string(),
            avatar_url: None,
            role: role.map(String::from),
            display_order: 3,
        }
    }

    #[test]
    fn test_to_entity_parses_role() {
        let member = TeamService::to_entity(entry(Some("girl_owner")), None).unwrap();
        assert_eq!(member.role, TeamRole::GirlOwner);
        assert_eq!(member.display_order, 3);
    }

    #[test]
    fn test_to_entity_defaults_to_early_supporter() {
        let member = TeamService::to_entity(entry(None), Some(7)).unwrap();
        assert_eq!(member.role, TeamRole::EarlySupporter);
        assert_eq!(member.display_order, 7);
    }

    #[test]
    fn test_to_entity_rejects_unknown_role() {
        let err = TeamService::to_entity(entry(Some("Janitor")), None).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_to_entity_rejects_empty_username() {
        let mut data = entry(Some("Owner"));
        data.username = String::new();
        let err = TeamService::to_entity(data, None).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    fn roster_member(id: &str, name: &str, role: TeamRole) -> TeamMember {
        TeamMember::new(id.to_string(), name.to_string(), None, role)
    }

    #[test]
    fn test_group_roster_drops_promoted_supporters() {
        let members = vec![
            roster_member("1", "imunknown69", TeamRole::Founder),
            roster_member("2", "alexx", TeamRole::Owner),
            roster_member("2", "alexx", TeamRole::EarlySupporter),
            roster_member("3", "mia", TeamRole::EarlySupporter),
        ];
        let roster = TeamService::group_roster(members);
        assert_eq!(roster.owners.len(), 1);
        assert_eq!(roster.early_support.len(), 1);
        assert_eq!(roster.early_support[0].user_id, "3");
    }

    #[test]
    fn test_group_roster_founder_is_a_list() {
        let members = vec![
            roster_member("1", "imunknown69", TeamRole::Founder),
            roster_member("4", "kat", TeamRole::GirlOwner),
        ];
        let roster = TeamService::group_roster(members);
        assert_eq!(roster.founder.len(), 1);
        assert_eq!(roster.founder[0].username, "imunknown69");
        assert_eq!(roster.girl_owners.len(), 1);
        assert!(roster.managers.is_empty());
    }
}
