//! Vouch entity - a community testimonial message

use chrono::{DateTime, Utc};

/// Vouch entity
///
/// Author and message ids come from Discord and are kept as opaque strings:
/// historical rows carry non-numeric placeholders such as `unknown`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vouch {
    pub id: String,
    /// Sequential display number. Monotone across the whole store; numbers of
    /// deleted vouches are never reused, so the highest number is the total
    /// ever given.
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

impl Vouch {
    /// Check if this vouch links to a proof
    #[inline]
    pub fn has_proof(&self) -> bool {
        self.proof_url.is_some()
    }

    /// Check if the vouch body is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.message.trim().is_empty()
    }

    /// Get a truncated preview of the message body
    pub fn preview(&self, max_len: usize) -> &str {
        if self.message.len() <= max_len {
            &self.message
        } else {
            let mut end = max_len;
            while !self.message.is_char_boundary(end) && end > 0 {
                end -= 1;
            }
            &self.message[..end]
        }
    }
}
