//! Location handlers

use axum::{extract::State, Json};
use stock_service::{InventoryService, LocationResponse};

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// All locations ordered by name
///
/// GET /api/locations
pub async fn list_locations(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<LocationResponse>>> {
    let service = InventoryService::new(state.service_context());
    let locations = service
        .list_locations()
        .await
        .map_err(ApiError::fetch("locations"))?;
    Ok(Json(locations))
}
