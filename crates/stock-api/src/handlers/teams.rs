//! Team handlers

use axum::{extract::State, Json};
use stock_service::{TeamResponse, TeamService};

use crate::extractors::Limit;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Teams with member, item, and location counts plus their members
///
/// GET /api/teams?limit=50
pub async fn list_teams(
    State(state): State<AppState>,
    limit: Limit,
) -> ApiResult<Json<Vec<TeamResponse>>> {
    let teams = TeamService::new(state.service_context())
        .list_teams(limit.get())
        .await
        .map_err(ApiError::fetch("teams"))?;
    Ok(Json(teams))
}
