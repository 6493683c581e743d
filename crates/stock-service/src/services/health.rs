//! Health service
//!
//! Dependency checks behind the readiness probe.

use tracing::{instrument, warn};

use crate::dto::{HealthResponse, ReadinessResponse};

use super::context::ServiceContext;

/// Health service
pub struct HealthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HealthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    pub fn liveness(&self) -> HealthResponse {
        HealthResponse::healthy()
    }

    /// Ready when the pool can hand out a connection that answers `SELECT 1`
    #[instrument(skip(self))]
    pub async fn readiness(&self) -> ReadinessResponse {
        ReadinessResponse::ready(self.database_ready().await)
    }

    async fn database_ready(&self) -> bool {
        let mut conn = match self.ctx.pool().acquire().await {
            Ok(conn) => conn,
            Err(e) => {
                warn!(error = %e, "Readiness: could not acquire a database connection");
                return false;
            }
        };

        match sqlx::query("SELECT 1").execute(&mut *conn).await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Readiness: database ping failed");
                false
            }
        }
    }
}
