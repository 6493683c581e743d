//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stock_core::entities::UserSummary;
use stock_core::traits::{RepoResult, UserRepository};
use stock_core::value_objects::MembershipCapability;

use crate::models::UserWithCountsModel;

use super::error::map_db_error;

/// `teams_count` counts teams the user created (`teams.user_id`),
/// `memberships_count` counts rows in `team_memberships`
const USERS_WITH_MEMBERSHIPS: &str = r"
    SELECT u.id, u.email, u.created_at, u.updated_at,
           COALESCE(tc.teams_count, 0) AS teams_count,
           COALESCE(mc.memberships_count, 0) AS memberships_count
    FROM users u
    LEFT JOIN (
        SELECT user_id, COUNT(*) AS teams_count
        FROM teams
        GROUP BY user_id
    ) tc ON u.id = tc.user_id
    LEFT JOIN (
        SELECT user_id, COUNT(*) AS memberships_count
        FROM team_memberships
        GROUP BY user_id
    ) mc ON u.id = mc.user_id
    ORDER BY u.created_at DESC
    LIMIT $1
";

const USERS_WITHOUT_MEMBERSHIPS: &str = r"
    SELECT u.id, u.email, u.created_at, u.updated_at,
           COALESCE(tc.teams_count, 0) AS teams_count,
           0::BIGINT AS memberships_count
    FROM users u
    LEFT JOIN (
        SELECT user_id, COUNT(*) AS teams_count
        FROM teams
        GROUP BY user_id
    ) tc ON u.id = tc.user_id
    ORDER BY u.created_at DESC
    LIMIT $1
";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn list_query(capability: MembershipCapability) -> &'static str {
        match capability {
            MembershipCapability::Available => USERS_WITH_MEMBERSHIPS,
            MembershipCapability::Absent => USERS_WITHOUT_MEMBERSHIPS,
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn list_with_counts(
        &self,
        limit: i64,
        capability: MembershipCapability,
    ) -> RepoResult<Vec<UserSummary>> {
        let rows = sqlx::query_as::<_, UserWithCountsModel>(Self::list_query(capability))
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(UserSummary::from).collect())
    }
}
