//! PostgreSQL implementation of LocationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stock_core::entities::Location;
use stock_core::traits::{LocationRepository, RepoResult};

use crate::models::LocationModel;

use super::error::map_db_error;

/// PostgreSQL implementation of LocationRepository
#[derive(Clone)]
pub struct PgLocationRepository {
    pool: PgPool,
}

impl PgLocationRepository {
    /// Create a new PgLocationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationRepository for PgLocationRepository {
    #[instrument(skip(self))]
    async fn list_by_name(&self) -> RepoResult<Vec<Location>> {
        let rows = sqlx::query_as::<_, LocationModel>(
            r"
            SELECT id, name, description, team_id, created_at, updated_at
            FROM locations
            ORDER BY name ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Location::from).collect())
    }
}
