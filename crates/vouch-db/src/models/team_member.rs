//! Team member database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the team_members table
#[derive(Debug, Clone, FromRow)]
pub struct TeamMemberModel {
    pub user_id: String,
    pub username: String,
    pub avatar_url: Option<String>,
    /// Canonical role label, parsed into `TeamRole` by the mapper
    pub role: String,
    pub display_order: i32,
    pub updated_at: DateTime<Utc>,
}
