//! Vouch database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the vouches table
#[derive(Debug, Clone, FromRow)]
pub struct VouchModel {
    pub id: String,
    pub vouch_number: i32,
    pub message_id: String,
    pub channel_id: String,
    pub author_id: String,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub proof_url: Option<String>,
}
