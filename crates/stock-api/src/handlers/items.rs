//! Item handlers

use axum::{extract::State, Json};
use stock_service::{InventoryService, ItemResponse};

use crate::extractors::Limit;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Newest items with their location name
///
/// GET /api/items?limit=50
pub async fn list_items(
    State(state): State<AppState>,
    limit: Limit,
) -> ApiResult<Json<Vec<ItemResponse>>> {
    let service = InventoryService::new(state.service_context());
    let items = service
        .list_items(limit.get())
        .await
        .map_err(ApiError::fetch("items"))?;
    Ok(Json(items))
}

/// Items at or below minimum stock, largest shortfall first
///
/// GET /api/low-stock
pub async fn list_low_stock(State(state): State<AppState>) -> ApiResult<Json<Vec<ItemResponse>>> {
    let service = InventoryService::new(state.service_context());
    let items = service
        .list_low_stock_items()
        .await
        .map_err(ApiError::fetch("low stock items"))?;
    Ok(Json(items))
}
