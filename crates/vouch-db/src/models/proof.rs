//! Proof database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the proofs table
#[derive(Debug, Clone, FromRow)]
pub struct ProofModel {
    pub id: String,
    pub message_id: String,
    pub channel_id: String,
    pub author_id: String,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Stored as a TEXT[] column
    pub image_urls: Vec<String>,
}

impl ProofModel {
    /// Check if the proof row carries any attachments
    #[inline]
    pub fn has_images(&self) -> bool {
        !self.image_urls.is_empty()
    }
}
