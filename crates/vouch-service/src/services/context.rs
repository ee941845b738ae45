//! Service context - dependency container for services
//!
//! Holds the repositories and shared state every service needs.

use std::sync::Arc;

use vouch_core::{MentionDirectory, ProofRepository, TeamMemberRepository, VouchRepository};
use vouch_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The mention directory used to render `<@id>` tokens
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    vouch_repo: Arc<dyn VouchRepository>,
    proof_repo: Arc<dyn ProofRepository>,
    team_repo: Arc<dyn TeamMemberRepository>,

    // Known Discord users for mention rendering
    mention_directory: Arc<MentionDirectory>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        vouch_repo: Arc<dyn VouchRepository>,
        proof_repo: Arc<dyn ProofRepository>,
        team_repo: Arc<dyn TeamMemberRepository>,
        mention_directory: Arc<MentionDirectory>,
    ) -> Self {
        Self {
            pool,
            vouch_repo,
            proof_repo,
            team_repo,
            mention_directory,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the vouch repository
    pub fn vouch_repo(&self) -> &dyn VouchRepository {
        self.vouch_repo.as_ref()
    }

    /// Get the proof repository
    pub fn proof_repo(&self) -> &dyn ProofRepository {
        self.proof_repo.as_ref()
    }

    /// Get the team member repository
    pub fn team_repo(&self) -> &dyn TeamMemberRepository {
        self.team_repo.as_ref()
    }

    /// Get the mention directory
    pub fn mention_directory(&self) -> &MentionDirectory {
        self.mention_directory.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("mention_directory", &self.mention_directory.len())
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    vouch_repo: Option<Arc<dyn VouchRepository>>,
    proof_repo: Option<Arc<dyn ProofRepository>>,
    team_repo: Option<Arc<dyn TeamMemberRepository>>,
    mention_directory: Option<Arc<MentionDirectory>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            vouch_repo: None,
            proof_repo: None,
            team_repo: None,
            mention_directory: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn vouch_repo(mut self, repo: Arc<dyn VouchRepository>) -> Self {
        self.vouch_repo = Some(repo);
        self
    }

    pub fn proof_repo(mut self, repo: Arc<dyn ProofRepository>) -> Self {
        self.proof_repo = Some(repo);
        self
    }

    pub fn team_repo(mut self, repo: Arc<dyn TeamMemberRepository>) -> Self {
        self.team_repo = Some(repo);
        self
    }

    pub fn mention_directory(mut self, directory: Arc<MentionDirectory>) -> Self {
        self.mention_directory = Some(directory);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| super::error::ServiceError::validation("pool is required"))?,
            self.vouch_repo
                .ok_or_else(|| super::error::ServiceError::validation("vouch_repo is required"))?,
            self.proof_repo
                .ok_or_else(|| super::error::ServiceError::validation("proof_repo is required"))?,
            self.team_repo
                .ok_or_else(|| super::error::ServiceError::validation("team_repo is required"))?,
            self.mention_directory.unwrap_or_default(),
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
