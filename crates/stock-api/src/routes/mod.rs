//! Route definitions
//!
//! Dashboard reads are mounted under /api; health probes sit at the root.

use axum::{routing::get, Router};

use crate::handlers::{health, items, locations, stats, teams, transactions, users};
use crate::state::AppState;

/// Create the dashboard API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(items::list_items))
        .route("/low-stock", get(items::list_low_stock))
        .route("/locations", get(locations::list_locations))
        .route("/transactions", get(transactions::list_transactions))
        .route("/stats", get(stats::dashboard_stats))
        .route("/teams", get(teams::list_teams))
        .route("/users", get(users::list_users))
}
