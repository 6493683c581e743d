//! # stock-api
//!
//! REST API server for the inventory dashboard, built with Axum.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{build_service_context, create_app, create_app_state, run};
pub use state::AppState;
