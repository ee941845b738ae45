//! PostgreSQL implementation of VouchRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use vouch_core::traits::{RepoResult, VouchQuery, VouchRepository};
use vouch_core::Vouch;

use crate::models::VouchModel;

use super::error::map_db_error;

/// PostgreSQL implementation of VouchRepository
#[derive(Clone)]
pub struct PgVouchRepository {
    pool: PgPool,
}

impl PgVouchRepository {
    /// Create a new PgVouchRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Wrap a search term for ILIKE substring matching
fn like_pattern(search: &str) -> String {
    format!("%{search}%")
}

#[async_trait]
impl VouchRepository for PgVouchRepository {
    #[instrument(skip(self))]
    async fn list(&self, query: VouchQuery) -> RepoResult<Vec<Vouch>> {
        let pattern = query.search.as_deref().map(like_pattern);

        let results = sqlx::query_as::<_, VouchModel>(
            r#"
            SELECT id, vouch_number, message_id, channel_id, author_id, author_name,
                   author_avatar, message, timestamp, proof_url
            FROM vouches
            WHERE ($1::text IS NULL OR author_name ILIKE $1 OR message ILIKE $1)
            ORDER BY vouch_number DESC, timestamp DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(pattern)
        .bind(query.limit)
        .bind(query.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Vouch::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self, search: Option<&str>) -> RepoResult<i64> {
        let pattern = search.map(like_pattern);

        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM vouches
            WHERE ($1::text IS NULL OR author_name ILIKE $1 OR message ILIKE $1)
            "#,
        )
        .bind(pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn max_vouch_number(&self) -> RepoResult<Option<i32>> {
        let max = sqlx::query_scalar::<_, Option<i32>>(
            r#"
            SELECT MAX(vouch_number) FROM vouches
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(max)
    }

    #[instrument(skip(self))]
    async fn all_messages(&self) -> RepoResult<Vec<String>> {
        let messages = sqlx::query_scalar::<_, String>(
            r#"
            SELECT message FROM vouches
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern() {
        assert_eq!(like_pattern("rex"), "%rex%");
        assert_eq!(like_pattern(""), "%%");
    }
}
