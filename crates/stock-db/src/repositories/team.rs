//! PostgreSQL implementation of TeamRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stock_core::entities::TeamSummary;
use stock_core::traits::{RepoResult, TeamRepository};
use stock_core::value_objects::MembershipCapability;

use crate::models::TeamWithCountsModel;

use super::error::map_db_error;

/// Teams with grouped counts, including `team_memberships`
const TEAMS_WITH_MEMBERSHIPS: &str = r"
    SELECT t.id, t.name, t.notes, t.user_id, t.created_at, t.updated_at,
           u.email AS owner_email,
           COALESCE(tm.members_count, 0) AS members_count,
           COALESCE(ti.items_count, 0) AS items_count,
           COALESCE(tl.locations_count, 0) AS locations_count
    FROM teams t
    LEFT JOIN users u ON t.user_id = u.id
    LEFT JOIN (
        SELECT team_id, COUNT(*) AS members_count
        FROM team_memberships
        GROUP BY team_id
    ) tm ON t.id = tm.team_id
    LEFT JOIN (
        SELECT team_id, COUNT(*) AS items_count
        FROM items
        GROUP BY team_id
    ) ti ON t.id = ti.team_id
    LEFT JOIN (
        SELECT team_id, COUNT(*) AS locations_count
        FROM locations
        GROUP BY team_id
    ) tl ON t.id = tl.team_id
    ORDER BY t.created_at DESC
    LIMIT $1
";

/// Teams with grouped counts for stores without `team_memberships`
const TEAMS_WITHOUT_MEMBERSHIPS: &str = r"
    SELECT t.id, t.name, t.notes, t.user_id, t.created_at, t.updated_at,
           u.email AS owner_email,
           0::BIGINT AS members_count,
           COALESCE(ti.items_count, 0) AS items_count,
           COALESCE(tl.locations_count, 0) AS locations_count
    FROM teams t
    LEFT JOIN users u ON t.user_id = u.id
    LEFT JOIN (
        SELECT team_id, COUNT(*) AS items_count
        FROM items
        GROUP BY team_id
    ) ti ON t.id = ti.team_id
    LEFT JOIN (
        SELECT team_id, COUNT(*) AS locations_count
        FROM locations
        GROUP BY team_id
    ) tl ON t.id = tl.team_id
    ORDER BY t.created_at DESC
    LIMIT $1
";

/// PostgreSQL implementation of TeamRepository
#[derive(Clone)]
pub struct PgTeamRepository {
    pool: PgPool,
}

impl PgTeamRepository {
    /// Create a new PgTeamRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn list_query(capability: MembershipCapability) -> &'static str {
        match capability {
            MembershipCapability::Available => TEAMS_WITH_MEMBERSHIPS,
            MembershipCapability::Absent => TEAMS_WITHOUT_MEMBERSHIPS,
        }
    }
}

#[async_trait]
impl TeamRepository for PgTeamRepository {
    #[instrument(skip(self))]
    async fn list_with_counts(
        &self,
        limit: i64,
        capability: MembershipCapability,
    ) -> RepoResult<Vec<TeamSummary>> {
        let rows = sqlx::query_as::<_, TeamWithCountsModel>(Self::list_query(capability))
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(TeamSummary::from).collect())
    }
}
