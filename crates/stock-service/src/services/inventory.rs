//! Inventory service
//!
//! Item, location, and transaction listings for the dashboard tables.

use tracing::instrument;

use crate::dto::{ItemResponse, LocationResponse, TransactionResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Inventory service
pub struct InventoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InventoryService<'a> {
    /// Create a new InventoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Newest items first, at most `limit`
    #[instrument(skip(self))]
    pub async fn list_items(&self, limit: i64) -> ServiceResult<Vec<ItemResponse>> {
        let items = self.ctx.item_repo().list_recent(limit).await?;
        Ok(items.into_iter().map(ItemResponse::from).collect())
    }

    /// Items at or below minimum stock, largest shortfall first
    #[instrument(skip(self))]
    pub async fn list_low_stock_items(&self) -> ServiceResult<Vec<ItemResponse>> {
        let items = self.ctx.item_repo().list_low_stock().await?;
        Ok(items.into_iter().map(ItemResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn list_locations(&self) -> ServiceResult<Vec<LocationResponse>> {
        let locations = self.ctx.location_repo().list_by_name().await?;
        Ok(locations.into_iter().map(LocationResponse::from).collect())
    }

    /// Newest transactions first, at most `limit`
    #[instrument(skip(self))]
    pub async fn list_recent_transactions(
        &self,
        limit: i64,
    ) -> ServiceResult<Vec<TransactionResponse>> {
        let transactions = self.ctx.transaction_repo().list_recent(limit).await?;
        Ok(transactions
            .into_iter()
            .map(TransactionResponse::from)
            .collect())
    }
}
