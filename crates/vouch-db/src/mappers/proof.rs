//! Proof entity <-> model mapper

use vouch_core::Proof;

use crate::models::ProofModel;

impl From<ProofModel> for Proof {
    fn from(model: ProofModel) -> Self {
        Proof {
            id: model.id,
            message_id: model.message_id,
            channel_id: model.channel_id,
            author_id: model.author_id,
            author_name: model.author_name,
            author_avatar: model.author_avatar,
            message: model.message,
            timestamp: model.timestamp,
            image_urls: model.image_urls,
        }
    }
}
