//! PostgreSQL implementation of ItemRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stock_core::entities::ItemWithLocation;
use stock_core::traits::{ItemRepository, RepoResult};

use crate::models::ItemWithLocationModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ItemRepository
#[derive(Clone)]
pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    /// Create a new PgItemRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    #[instrument(skip(self))]
    async fn list_recent(&self, limit: i64) -> RepoResult<Vec<ItemWithLocation>> {
        let rows = sqlx::query_as::<_, ItemWithLocationModel>(
            r"
            SELECT i.id, i.name, i.sku, i.barcode, i.cost::FLOAT8 AS cost, i.price::FLOAT8 AS price,
                   i.item_type, i.brand, i.initial_quantity, i.team_id, i.current_stock,
                   i.minimum_stock, i.location_id, i.created_at, i.updated_at,
                   l.name AS location_name
            FROM items i
            LEFT JOIN locations l ON i.location_id = l.id
            ORDER BY i.created_at DESC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ItemWithLocation::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_low_stock(&self) -> RepoResult<Vec<ItemWithLocation>> {
        let rows = sqlx::query_as::<_, ItemWithLocationModel>(
            r"
            SELECT i.id, i.name, i.sku, i.barcode, i.cost::FLOAT8 AS cost, i.price::FLOAT8 AS price,
                   i.item_type, i.brand, i.initial_quantity, i.team_id, i.current_stock,
                   i.minimum_stock, i.location_id, i.created_at, i.updated_at,
                   l.name AS location_name
            FROM items i
            LEFT JOIN locations l ON i.location_id = l.id
            WHERE i.current_stock <= i.minimum_stock
            ORDER BY (i.current_stock::BIGINT - i.minimum_stock::BIGINT) ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ItemWithLocation::from).collect())
    }
}
