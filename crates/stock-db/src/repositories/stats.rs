//! PostgreSQL implementation of StatsRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stock_core::traits::{RepoResult, StatsRepository};

use super::error::map_db_error;

/// PostgreSQL implementation of StatsRepository.
///
/// Each aggregate runs on its own pooled connection so callers may await
/// them concurrently.
#[derive(Clone)]
pub struct PgStatsRepository {
    pool: PgPool,
}

impl PgStatsRepository {
    /// Create a new PgStatsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn count(&self, sql: &'static str) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(sql)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    #[instrument(skip(self))]
    async fn count_items(&self) -> RepoResult<i64> {
        self.count("SELECT COUNT(*) FROM items").await
    }

    #[instrument(skip(self))]
    async fn count_locations(&self) -> RepoResult<i64> {
        self.count("SELECT COUNT(*) FROM locations").await
    }

    #[instrument(skip(self))]
    async fn count_transactions(&self) -> RepoResult<i64> {
        self.count("SELECT COUNT(*) FROM stock_transactions").await
    }

    #[instrument(skip(self))]
    async fn count_low_stock(&self) -> RepoResult<i64> {
        self.count("SELECT COUNT(*) FROM items WHERE current_stock <= minimum_stock")
            .await
    }

    #[instrument(skip(self))]
    async fn total_inventory_value(&self) -> RepoResult<f64> {
        // SUM over no rows is NULL
        sqlx::query_scalar::<_, f64>(
            r"
            SELECT COALESCE(SUM(current_stock * cost), 0)::FLOAT8
            FROM items
            WHERE current_stock > 0
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
