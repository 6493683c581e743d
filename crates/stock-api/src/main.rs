//! Inventory dashboard API server entry point
//!
//! Run with:
//! ```bash
//! DATABASE_URL=postgres://localhost/inventory cargo run -p stock-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use stock_common::{try_init_tracing, AppConfig, AppError};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load .env before tracing reads LOG_FORMAT / APP_ENV
    let _ = dotenvy::dotenv();

    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(code = e.error_code(), error = %e, "Server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    info!("Starting inventory dashboard API...");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        addr = %config.api.address(),
        "Configuration loaded"
    );

    stock_api::run(config).await
}
