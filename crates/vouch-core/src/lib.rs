//! # vouch-core
//!
//! Domain layer containing entities, value objects, the message statistics
//! extractor, the mention resolver, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod mentions;
pub mod stats;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Proof, TeamMember, Vouch};
pub use error::DomainError;
pub use mentions::{resolve_mentions, MentionSegment, MENTION_PLACEHOLDER};
pub use stats::{extract_stats, MessageStats, StatRule, RULES};
pub use traits::{
    ProofRepository, RepoResult, TeamMemberRepository, VouchQuery, VouchRepository,
};
pub use value_objects::{MentionDirectory, TeamRole, TeamRoleParseError};
