//! Server setup and initialization
//!
//! Provides the application builder, dependency wiring, and the server runner.

use std::sync::Arc;

use axum::Router;
use stock_common::{AppConfig, AppError};
use stock_db::{
    create_pool, run_migrations, PgItemRepository, PgLocationRepository, PgMembershipRepository,
    PgPool, PgSchemaProbe, PgStatsRepository, PgTeamRepository, PgTransactionRepository,
    PgUserRepository,
};
use stock_service::{ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware.
///
/// Health probes bypass the rate limiter.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_rate_limit(create_router(), &config.rate_limit);
    let router = apply_middleware(
        api.merge(health_routes()),
        &config.cors,
        config.app.env.is_production(),
    );
    router.with_state(state)
}

/// Wire the PostgreSQL repositories around `pool`
pub fn build_service_context(pool: PgPool) -> Result<ServiceContext, AppError> {
    ServiceContextBuilder::new()
        .item_repo(Arc::new(PgItemRepository::new(pool.clone())))
        .location_repo(Arc::new(PgLocationRepository::new(pool.clone())))
        .transaction_repo(Arc::new(PgTransactionRepository::new(pool.clone())))
        .stats_repo(Arc::new(PgStatsRepository::new(pool.clone())))
        .team_repo(Arc::new(PgTeamRepository::new(pool.clone())))
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .membership_repo(Arc::new(PgMembershipRepository::new(pool.clone())))
        .schema_probe(Arc::new(PgSchemaProbe::new(pool.clone())))
        .pool(pool)
        .build()
        .map_err(AppError::config)
}

/// Connect to the database and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = stock_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if let Some(dir) = &config.database.migrations_dir {
        run_migrations(&pool, dir)
            .await
            .map_err(|e| AppError::Migration(e.to_string()))?;
    }

    let service_context = build_service_context(pool)?;
    Ok(AppState::new(service_context, config))
}

/// Serve `app` on `listener` until a shutdown signal arrives
pub async fn run_server(listener: TcpListener, app: Router) -> Result<(), AppError> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Server(e.to_string()))
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let pool = state.service_context().pool().clone();

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Server(format!("Failed to bind to {addr}: {e}")))?;

    let result = run_server(listener, create_app(state)).await;

    info!("Closing database pool");
    pool.close().await;

    result
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
