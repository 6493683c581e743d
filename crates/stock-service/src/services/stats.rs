//! Dashboard statistics service

use stock_core::entities::DashboardStats;
use tracing::{debug, instrument};

use crate::dto::DashboardStatsResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Stats service
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    /// Create a new StatsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Build the dashboard snapshot.
    ///
    /// The five aggregates are independent and run concurrently; the first
    /// failure fails the whole snapshot.
    #[instrument(skip(self))]
    pub async fn dashboard_stats(&self) -> ServiceResult<DashboardStatsResponse> {
        let repo = self.ctx.stats_repo();

        let (total_items, total_locations, total_transactions, low_stock_items, total_value) = tokio::try_join!(
            repo.count_items(),
            repo.count_locations(),
            repo.count_transactions(),
            repo.count_low_stock(),
            repo.total_inventory_value(),
        )?;

        let stats = DashboardStats {
            total_items,
            total_locations,
            total_transactions,
            low_stock_items,
            total_value,
        };
        debug!(?stats, low_stock_ratio = stats.low_stock_ratio(), "Dashboard stats computed");

        Ok(stats.into())
    }
}
