//! PostgreSQL implementation of MembershipRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stock_core::entities::{TeamMember, UserMembership};
use stock_core::traits::{MembershipRepository, RepoResult};

use crate::models::{TeamMemberModel, UserMembershipModel};

use super::error::{map_db_error, try_map_rows};

/// PostgreSQL implementation of MembershipRepository.
///
/// Both lookups left-join the other side of the relation so every membership
/// row is returned, keeping list lengths equal to the grouped counts.
#[derive(Clone)]
pub struct PgMembershipRepository {
    pool: PgPool,
}

impl PgMembershipRepository {
    /// Create a new PgMembershipRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MembershipRepository for PgMembershipRepository {
    #[instrument(skip(self))]
    async fn find_by_team(&self, team_id: i64) -> RepoResult<Vec<TeamMember>> {
        let rows = sqlx::query_as::<_, TeamMemberModel>(
            r"
            SELECT tm.user_id, u.email, tm.role, tm.created_at AS joined_at
            FROM team_memberships tm
            LEFT JOIN users u ON tm.user_id = u.id
            WHERE tm.team_id = $1
            ORDER BY tm.created_at ASC, tm.user_id ASC
            ",
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_map_rows(rows)
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Vec<UserMembership>> {
        let rows = sqlx::query_as::<_, UserMembershipModel>(
            r"
            SELECT tm.team_id, t.name AS team_name, tm.role, tm.created_at AS joined_at
            FROM team_memberships tm
            LEFT JOIN teams t ON tm.team_id = t.id
            WHERE tm.user_id = $1
            ORDER BY tm.created_at ASC, tm.team_id ASC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_map_rows(rows)
    }
}
