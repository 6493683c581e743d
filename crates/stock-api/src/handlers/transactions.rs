//! Stock transaction handlers

use axum::{extract::State, Json};
use stock_service::{InventoryService, TransactionResponse};

use crate::extractors::Limit;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Recent stock movements with item name and SKU
///
/// GET /api/transactions?limit=20
pub async fn list_transactions(
    State(state): State<AppState>,
    limit: Limit<20>,
) -> ApiResult<Json<Vec<TransactionResponse>>> {
    let service = InventoryService::new(state.service_context());
    let transactions = service
        .list_recent_transactions(limit.get())
        .await
        .map_err(ApiError::fetch("transactions"))?;
    Ok(Json(transactions))
}
