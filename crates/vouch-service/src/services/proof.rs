//! Proof service
//!
//! Handles the paginated proof listing.

use tracing::{info, instrument};

use crate::dto::mappers::proof_to_response;
use crate::dto::{PageMeta, ProofListResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Proof service
pub struct ProofService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProofService<'a> {
    /// Create a new ProofService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List proofs, newest first
    #[instrument(skip(self))]
    pub async fn list_proofs(&self, page: i64, limit: i64) -> ServiceResult<ProofListResponse> {
        let offset = (page - 1) * limit;

        let proofs = self.ctx.proof_repo().list(offset, limit).await?;
        let total = self.ctx.proof_repo().count().await?;

        info!(page, limit, returned = proofs.len(), "Listed proofs");

        let directory = self.ctx.mention_directory();
        Ok(ProofListResponse {
            proofs: proofs
                .into_iter()
                .map(|proof| proof_to_response(proof, directory))
                .collect(),
            pagination: PageMeta::new(page, limit, total, total),
        })
    }
}
