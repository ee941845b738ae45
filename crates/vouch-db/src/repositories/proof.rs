//! PostgreSQL implementation of ProofRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use vouch_core::traits::{ProofRepository, RepoResult};
use vouch_core::Proof;

use crate::models::ProofModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ProofRepository
#[derive(Clone)]
pub struct PgProofRepository {
    pool: PgPool,
}

impl PgProofRepository {
    /// Create a new PgProofRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProofRepository for PgProofRepository {
    #[instrument(skip(self))]
    async fn list(&self, offset: i64, limit: i64) -> RepoResult<Vec<Proof>> {
        let results = sqlx::query_as::<_, ProofModel>(
            r#"
            SELECT id, message_id, channel_id, author_id, author_name,
                   author_avatar, message, timestamp, image_urls
            FROM proofs
            ORDER BY timestamp DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Proof::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM proofs
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
