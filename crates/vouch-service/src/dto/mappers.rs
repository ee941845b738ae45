//! Entity to response DTO mapping
//!
//! Mention resolution happens here so the raw message body and the rendered
//! segment list always come from the same source text.

use vouch_core::{MentionDirectory, MentionSegment, Proof, TeamMember, Vouch};

use super::responses::{MessageSegmentDto, ProofResponse, TeamMemberResponse, VouchResponse};

impl From<MentionSegment> for MessageSegmentDto {
    fn from(segment: MentionSegment) -> Self {
        match segment {
            MentionSegment::Text { content } => Self::Text { content },
            MentionSegment::Mention {
                user_id,
                display_name,
            } => Self::Mention {
                content: format!("@{display_name}"),
                user_id,
                display_name,
            },
        }
    }
}

/// Resolve a message body into response segments
pub fn message_parts(message: &str, directory: &MentionDirectory) -> Vec<MessageSegmentDto> {
    vouch_core::resolve_mentions(message, directory)
        .into_iter()
        .map(MessageSegmentDto::from)
        .collect()
}

/// Map a vouch entity to its response shape
pub fn vouch_to_response(vouch: Vouch, directory: &MentionDirectory) -> VouchResponse {
    let parts = message_parts(&vouch.message, directory);
    VouchResponse {
        id: vouch.id,
        vouch_number: vouch.vouch_number,
        message_id: vouch.message_id,
        author_id: vouch.author_id,
        author_name: vouch.author_name,
        author_avatar: vouch.author_avatar,
        message: vouch.message,
        message_parts: parts,
        timestamp: vouch.timestamp,
        channel_id: vouch.channel_id,
        proof_url: vouch.proof_url,
    }
}

/// Map a proof entity to its response shape
pub fn proof_to_response(proof: Proof, directory: &MentionDirectory) -> ProofResponse {
    let parts = message_parts(&proof.message, directory);
    ProofResponse {
        id: proof.id,
        message_id: proof.message_id,
        author_id: proof.author_id,
        author_name: proof.author_name,
        author_avatar: proof.author_avatar,
        message: proof.message,
        message_parts: parts,
        image_urls: proof.image_urls,
        timestamp: proof.timestamp,
        channel_id: proof.channel_id,
    }
}

impl From<TeamMember> for TeamMemberResponse {
    fn from(member: TeamMember) -> Self {
        Self {
            user_id: member.user_id,
            username: member.username,
            avatar_url: member.avatar_url,
            role: member.role.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use vouch_core::TeamRole;

    #[test]
    fn test_vouch_mapping_resolves_mentions() {
        let directory = MentionDirectory::from_pairs([("123", "rex")]);
        let vouch = Vouch {
            id: "v1".to_string(),
            vouch_number: 7,
            message_id: "m1".to_string(),
            channel_id: "c1".to_string(),
            author_id: "a1".to_string(),
            author_name: "buyer".to_string(),
            author_avatar: None,
            message: "thanks <@123>!".to_string(),
            timestamp: Utc::now(),
            proof_url: None,
        };

        let response = vouch_to_response(vouch, &directory);
        assert_eq!(response.vouch_number, 7);
        assert_eq!(response.message, "thanks <@123>!");
        assert_eq!(
            response.message_parts,
            vec![
                MessageSegmentDto::Text {
                    content: "thanks ".to_string()
                },
                MessageSegmentDto::Mention {
                    content: "@rex".to_string(),
                    user_id: "123".to_string(),
                    display_name: "rex".to_string()
                },
                MessageSegmentDto::Text {
                    content: "!".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_team_member_mapping_uses_display_label() {
        let member = TeamMember::new(
            "1".to_string(),
            "lia".to_string(),
            None,
            TeamRole::GirlOwner,
        );
        let response = TeamMemberResponse::from(member);
        assert_eq!(response.role, "Girl Owner");
    }
}
