//! PostgreSQL implementation of TransactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stock_core::entities::TransactionWithItem;
use stock_core::traits::{RepoResult, TransactionRepository};

use crate::models::TransactionWithItemModel;

use super::error::{map_db_error, try_map_rows};

/// PostgreSQL implementation of TransactionRepository
#[derive(Clone)]
pub struct PgTransactionRepository {
    pool: PgPool,
}

impl PgTransactionRepository {
    /// Create a new PgTransactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionRepository for PgTransactionRepository {
    #[instrument(skip(self))]
    async fn list_recent(&self, limit: i64) -> RepoResult<Vec<TransactionWithItem>> {
        // Inner join: transactions whose item is gone are not listed
        let rows = sqlx::query_as::<_, TransactionWithItemModel>(
            r"
            SELECT st.id, st.item_id, st.team_id, st.transaction_type, st.quantity, st.notes,
                   st.user_id, st.source_location_id, st.destination_location_id,
                   st.created_at, st.updated_at,
                   i.name AS item_name, i.sku
            FROM stock_transactions st
            JOIN items i ON st.item_id = i.id
            ORDER BY st.created_at DESC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        try_map_rows(rows)
    }
}
