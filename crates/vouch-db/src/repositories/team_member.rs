//! PostgreSQL implementation of TeamMemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use vouch_core::traits::{RepoResult, TeamMemberRepository};
use vouch_core::{TeamMember, TeamRole};

use crate::models::TeamMemberModel;

use super::error::map_db_error;

/// PostgreSQL implementation of TeamMemberRepository
#[derive(Clone)]
pub struct PgTeamMemberRepository {
    pool: PgPool,
}

impl PgTeamMemberRepository {
    /// Create a new PgTeamMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamMemberRepository for PgTeamMemberRepository {
    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<TeamMember>> {
        let results = sqlx::query_as::<_, TeamMemberModel>(
            r#"
            SELECT user_id, username, avatar_url, role, display_order, updated_at
            FROM team_members
            ORDER BY display_order ASC, username ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(TeamMember::try_from).collect()
    }

    #[instrument(skip(self, member), fields(user_id = %member.user_id))]
    async fn upsert(&self, member: &TeamMember) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO team_members (user_id, username, avatar_url, role, display_order, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            ON CONFLICT (user_id) DO UPDATE
            SET username = EXCLUDED.username,
                avatar_url = EXCLUDED.avatar_url,
                role = EXCLUDED.role,
                display_order = EXCLUDED.display_order,
                updated_at = NOW()
            "#,
        )
        .bind(&member.user_id)
        .bind(&member.username)
        .bind(&member.avatar_url)
        .bind(member.role.as_str())
        .bind(member.display_order)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, members), fields(role = %role, count = members.len()))]
    async fn replace_role(&self, role: TeamRole, members: &[TeamMember]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM team_members WHERE role = $1")
            .bind(role.as_str())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        for member in members {
            sqlx::query(
                r#"
                INSERT INTO team_members (user_id, username, avatar_url, role, display_order, updated_at)
                VALUES ($1, $2, $3, $4, $5, NOW())
                ON CONFLICT (user_id) DO UPDATE
                SET username = EXCLUDED.username,
                    avatar_url = EXCLUDED.avatar_url,
                    role = EXCLUDED.role,
                    display_order = EXCLUDED.display_order,
                    updated_at = NOW()
                "#,
            )
            .bind(&member.user_id)
            .bind(&member.username)
            .bind(&member.avatar_url)
            .bind(role.as_str())
            .bind(member.display_order)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }
}
