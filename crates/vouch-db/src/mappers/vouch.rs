//! Vouch entity <-> model mapper

use vouch_core::Vouch;

use crate::models::VouchModel;

impl From<VouchModel> for Vouch {
    fn from(model: VouchModel) -> Self {
        Vouch {
            id: model.id,
            vouch_number: model.vouch_number,
            message_id: model.message_id,
            channel_id: model.channel_id,
            author_id: model.author_id,
            author_name: model.author_name,
            author_avatar: model.author_avatar,
            message: model.message,
            timestamp: model.timestamp,
            proof_url: model.proof_url,
        }
    }
}
