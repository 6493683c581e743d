//! User handlers

use axum::{extract::State, Json};
use stock_service::{UserResponse, UserService};

use crate::extractors::Limit;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Users with created-team and membership counts plus their teams
///
/// GET /api/users?limit=50
pub async fn list_users(
    State(state): State<AppState>,
    limit: Limit,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = UserService::new(state.service_context())
        .list_users(limit.get())
        .await
        .map_err(ApiError::fetch("users"))?;
    Ok(Json(users))
}
