//! Proof entity - a message with image attachments offered as evidence

use chrono::{DateTime, Utc};

/// Proof entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    pub id: String,
    pub message_id: String,
    pub channel_id: String,
    pub author_id: String,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub image_urls: Vec<String>,
}

impl Proof {
    /// Check if the proof carries any image attachments
    #[inline]
    pub fn has_images(&self) -> bool {
        !self.image_urls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_images() {
        let mut proof = Proof {
            id: "p1".to_string(),
            message_id: "1".to_string(),
            channel_id: "2".to_string(),
            author_id: "3".to_string(),
            author_name: "_.damonn".to_string(),
            author_avatar: None,
            message: "payment screenshot".to_string(),
            timestamp: Utc::now(),
            image_urls: vec![],
        };
        assert!(!proof.has_images());
        proof.image_urls.push("https://cdn.example/1.png".to_string());
        assert!(proof.has_images());
    }
}
