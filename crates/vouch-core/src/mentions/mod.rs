//! Mention resolution
//!
//! Splits a message body into an ordered sequence of plain-text and mention
//! segments. Only the exact Discord token form `<@digits>` is recognized;
//! anything else, including `@name` literals, stays plain text. The split is
//! lossless in display form: concatenating segment display contents yields the
//! message with each token replaced by `@Name`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::value_objects::MentionDirectory;

/// Display name used when a mentioned id is not in the directory
pub const MENTION_PLACEHOLDER: &str = "User";

static MENTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<@(\d+)>").unwrap());

/// One segment of a resolved message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MentionSegment {
    /// Plain text, passed through untouched
    Text { content: String },
    /// A resolved user mention
    Mention {
        user_id: String,
        display_name: String,
    },
}

impl MentionSegment {
    /// Rendered form of this segment: the text itself, or `@Name`
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Text { content } => content.clone(),
            Self::Mention { display_name, .. } => format!("@{display_name}"),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_mention(&self) -> bool {
        matches!(self, Self::Mention { .. })
    }
}

/// Decompose a message into text and mention segments.
///
/// Order-preserving; a message without mentions (including the empty message)
/// comes back as a single text segment.
#[must_use]
pub fn resolve_mentions(message: &str, directory: &MentionDirectory) -> Vec<MentionSegment> {
    let mut segments = Vec::new();
    let mut last_end = 0;

    for captures in MENTION_RE.captures_iter(message) {
        let token = captures.get(0).expect("capture group 0 always present");
        let user_id = &captures[1];

        if token.start() > last_end {
            segments.push(MentionSegment::Text {
                content: message[last_end..token.start()].to_string(),
            });
        }

        let display_name = directory
            .display_name(user_id)
            .unwrap_or(MENTION_PLACEHOLDER)
            .to_string();
        segments.push(MentionSegment::Mention {
            user_id: user_id.to_string(),
            display_name,
        });

        last_end = token.end();
    }

    if last_end < message.len() {
        segments.push(MentionSegment::Text {
            content: message[last_end..].to_string(),
        });
    }

    if segments.is_empty() {
        segments.push(MentionSegment::Text {
            content: message.to_string(),
        });
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> MentionDirectory {
        MentionDirectory::from_pairs([("123", "Bob")])
    }

    fn rendered(segments: &[MentionSegment]) -> String {
        segments.iter().map(MentionSegment::display).collect()
    }

    #[test]
    fn test_known_mention_resolves() {
        let segments = resolve_mentions("hello <@123> world", &directory());
        assert_eq!(
            segments,
            vec![
                MentionSegment::Text {
                    content: "hello ".to_string()
                },
                MentionSegment::Mention {
                    user_id: "123".to_string(),
                    display_name: "Bob".to_string()
                },
                MentionSegment::Text {
                    content: " world".to_string()
                },
            ]
        );
        assert_eq!(rendered(&segments), "hello @Bob world");
    }

    #[test]
    fn test_unknown_mention_uses_placeholder() {
        let segments = resolve_mentions("<@999>", &MentionDirectory::new());
        assert_eq!(
            segments,
            vec![MentionSegment::Mention {
                user_id: "999".to_string(),
                display_name: MENTION_PLACEHOLDER.to_string()
            }]
        );
        assert_eq!(rendered(&segments), "@User");
    }

    #[test]
    fn test_no_mentions_is_single_text_segment() {
        let segments = resolve_mentions("plain text @rex.f", &directory());
        assert_eq!(
            segments,
            vec![MentionSegment::Text {
                content: "plain text @rex.f".to_string()
            }]
        );
    }

    #[test]
    fn test_empty_message() {
        let segments = resolve_mentions("", &directory());
        assert_eq!(
            segments,
            vec![MentionSegment::Text {
                content: String::new()
            }]
        );
    }

    #[test]
    fn test_malformed_tokens_stay_text() {
        for raw in ["<@abc>", "<@>", "<@ 123>", "<@123", "@123>"] {
            let segments = resolve_mentions(raw, &directory());
            assert_eq!(segments.len(), 1, "{raw} should not be parsed");
            assert!(!segments[0].is_mention());
        }
    }

    #[test]
    fn test_adjacent_mentions() {
        let segments = resolve_mentions("<@123><@999>", &directory());
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(MentionSegment::is_mention));
        assert_eq!(rendered(&segments), "@Bob@User");
    }
}
