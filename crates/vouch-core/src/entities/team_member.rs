//! TeamMember entity - a staff roster entry pushed by the community bot

use chrono::{DateTime, Utc};

use crate::value_objects::TeamRole;

/// Team member entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub user_id: String,
    pub username: String,
    pub avatar_url: Option<String>,
    pub role: TeamRole,
    /// Position within the rendered roster, ascending
    pub display_order: i32,
    pub updated_at: DateTime<Utc>,
}

impl TeamMember {
    /// Create a new roster entry with default ordering
    pub fn new(user_id: String, username: String, avatar_url: Option<String>, role: TeamRole) -> Self {
        Self {
            user_id,
            username,
            avatar_url,
            role,
            display_order: 0,
            updated_at: Utc::now(),
        }
    }

    /// Core team members are everyone except early supporters
    #[inline]
    pub fn is_core_team(&self) -> bool {
        self.role != TeamRole::EarlySupporter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_team_membership() {
        let founder = TeamMember::new(
            "1".to_string(),
            "imunknown69".to_string(),
            None,
            TeamRole::Founder,
        );
        assert!(founder.is_core_team());

        let supporter = TeamMember::new(
            "2".to_string(),
            "alexx".to_string(),
            None,
            TeamRole::EarlySupporter,
        );
        assert!(!supporter.is_core_team());
    }
}
