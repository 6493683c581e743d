//! PostgreSQL implementation of SchemaProbe

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use stock_core::traits::{RepoResult, SchemaProbe};
use stock_core::value_objects::MembershipCapability;

use super::error::map_db_error;

/// Name of the optional membership relation
pub const MEMBERSHIP_TABLE: &str = "team_memberships";

/// Looks up optional relations in `information_schema`
#[derive(Clone)]
pub struct PgSchemaProbe {
    pool: PgPool,
}

impl PgSchemaProbe {
    /// Create a new PgSchemaProbe
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn table_exists(&self, table: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS (
                SELECT 1 FROM information_schema.tables
                WHERE table_schema = current_schema()
                AND table_name = $1
            )
            ",
        )
        .bind(table)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}

#[async_trait]
impl SchemaProbe for PgSchemaProbe {
    #[instrument(skip(self))]
    async fn membership_capability(&self) -> RepoResult<MembershipCapability> {
        let exists = self.table_exists(MEMBERSHIP_TABLE).await?;
        debug!(table = MEMBERSHIP_TABLE, exists, "Probed optional relation");
        Ok(MembershipCapability::from_exists(exists))
    }
}
