//! Service context - dependency container for services
//!
//! Holds the connection pool and every repository the services read through.

use std::sync::Arc;

use stock_core::traits::{
    ItemRepository, LocationRepository, MembershipRepository, SchemaProbe, StatsRepository,
    TeamRepository, TransactionRepository, UserRepository,
};
use stock_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// The pool is the single process-wide handle; repositories receive clones of
/// it at construction and the server closes it on shutdown.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    item_repo: Arc<dyn ItemRepository>,
    location_repo: Arc<dyn LocationRepository>,
    transaction_repo: Arc<dyn TransactionRepository>,
    stats_repo: Arc<dyn StatsRepository>,
    team_repo: Arc<dyn TeamRepository>,
    user_repo: Arc<dyn UserRepository>,
    membership_repo: Arc<dyn MembershipRepository>,
    schema_probe: Arc<dyn SchemaProbe>,
}

impl ServiceContext {
    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    pub fn item_repo(&self) -> &dyn ItemRepository {
        self.item_repo.as_ref()
    }

    pub fn location_repo(&self) -> &dyn LocationRepository {
        self.location_repo.as_ref()
    }

    pub fn transaction_repo(&self) -> &dyn TransactionRepository {
        self.transaction_repo.as_ref()
    }

    pub fn stats_repo(&self) -> &dyn StatsRepository {
        self.stats_repo.as_ref()
    }

    pub fn team_repo(&self) -> &dyn TeamRepository {
        self.team_repo.as_ref()
    }

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the membership repository. Only valid once the membership capability is available.
    pub fn membership_repo(&self) -> &dyn MembershipRepository {
        self.membership_repo.as_ref()
    }

    pub fn schema_probe(&self) -> &dyn SchemaProbe {
        self.schema_probe.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    item_repo: Option<Arc<dyn ItemRepository>>,
    location_repo: Option<Arc<dyn LocationRepository>>,
    transaction_repo: Option<Arc<dyn TransactionRepository>>,
    stats_repo: Option<Arc<dyn StatsRepository>>,
    team_repo: Option<Arc<dyn TeamRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    membership_repo: Option<Arc<dyn MembershipRepository>>,
    schema_probe: Option<Arc<dyn SchemaProbe>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn item_repo(mut self, repo: Arc<dyn ItemRepository>) -> Self {
        self.item_repo = Some(repo);
        self
    }

    pub fn location_repo(mut self, repo: Arc<dyn LocationRepository>) -> Self {
        self.location_repo = Some(repo);
        self
    }

    pub fn transaction_repo(mut self, repo: Arc<dyn TransactionRepository>) -> Self {
        self.transaction_repo = Some(repo);
        self
    }

    pub fn stats_repo(mut self, repo: Arc<dyn StatsRepository>) -> Self {
        self.stats_repo = Some(repo);
        self
    }

    pub fn team_repo(mut self, repo: Arc<dyn TeamRepository>) -> Self {
        self.team_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn membership_repo(mut self, repo: Arc<dyn MembershipRepository>) -> Self {
        self.membership_repo = Some(repo);
        self
    }

    pub fn schema_probe(mut self, probe: Arc<dyn SchemaProbe>) -> Self {
        self.schema_probe = Some(probe);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            pool: self.pool.ok_or_else(|| ServiceError::validation("pool is required"))?,
            item_repo: self
                .item_repo
                .ok_or_else(|| ServiceError::validation("item_repo is required"))?,
            location_repo: self
                .location_repo
                .ok_or_else(|| ServiceError::validation("location_repo is required"))?,
            transaction_repo: self
                .transaction_repo
                .ok_or_else(|| ServiceError::validation("transaction_repo is required"))?,
            stats_repo: self
                .stats_repo
                .ok_or_else(|| ServiceError::validation("stats_repo is required"))?,
            team_repo: self
                .team_repo
                .ok_or_else(|| ServiceError::validation("team_repo is required"))?,
            user_repo: self
                .user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            membership_repo: self
                .membership_repo
                .ok_or_else(|| ServiceError::validation("membership_repo is required"))?,
            schema_probe: self
                .schema_probe
                .ok_or_else(|| ServiceError::validation("schema_probe is required"))?,
        })
    }
}
