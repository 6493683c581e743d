//! Dashboard stats handler

use axum::{extract::State, Json};
use stock_service::{DashboardStatsResponse, StatsService};

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// GET /api/stats
pub async fn dashboard_stats(
    State(state): State<AppState>,
) -> ApiResult<Json<DashboardStatsResponse>> {
    let stats = StatsService::new(state.service_context())
        .dashboard_stats()
        .await
        .map_err(ApiError::fetch("stats"))?;
    Ok(Json(stats))
}
