//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Proof, TeamMember, Vouch};
use crate::error::DomainError;
use crate::value_objects::TeamRole;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Vouch Repository
// ============================================================================

/// Offset pagination and search options for vouch listings
#[derive(Debug, Clone, Default)]
pub struct VouchQuery {
    /// Rows to skip
    pub offset: i64,
    /// Maximum rows to return
    pub limit: i64,
    /// Case-insensitive substring filter over author name and message body
    pub search: Option<String>,
}

#[async_trait]
pub trait VouchRepository: Send + Sync {
    /// List vouches ordered by vouch number then timestamp, newest first
    async fn list(&self, query: VouchQuery) -> RepoResult<Vec<Vouch>>;

    /// Count vouches matching the optional search filter
    async fn count(&self, search: Option<&str>) -> RepoResult<i64>;

    /// Highest vouch number ever assigned, None when the store is empty.
    /// Used as the display total so deleted vouches still count.
    async fn max_vouch_number(&self) -> RepoResult<Option<i32>>;

    /// Full scan of every message body, for statistics extraction
    async fn all_messages(&self) -> RepoResult<Vec<String>>;
}

// ============================================================================
// Proof Repository
// ============================================================================

#[async_trait]
pub trait ProofRepository: Send + Sync {
    /// List proofs ordered by timestamp, newest first
    async fn list(&self, offset: i64, limit: i64) -> RepoResult<Vec<Proof>>;

    /// Total number of proofs
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Team Member Repository
// ============================================================================

#[async_trait]
pub trait TeamMemberRepository: Send + Sync {
    /// List the whole roster ordered by display order
    async fn list_all(&self) -> RepoResult<Vec<TeamMember>>;

    /// Insert or update a member keyed by user id
    async fn upsert(&self, member: &TeamMember) -> RepoResult<()>;

    /// Atomically replace every member holding `role` with the given set
    async fn replace_role(&self, role: TeamRole, members: &[TeamMember]) -> RepoResult<()>;
}
