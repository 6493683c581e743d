//! # stock-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `stock-core`. It handles:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → Entity mappers
//! - Repository implementations, including the `team_memberships` probe
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stock_db::pool::{create_pool, DatabaseConfig};
//! use stock_db::repositories::PgItemRepository;
//! use stock_core::traits::ItemRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let items = PgItemRepository::new(pool).list_recent(50).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgItemRepository, PgLocationRepository, PgMembershipRepository, PgSchemaProbe,
    PgStatsRepository, PgTeamRepository, PgTransactionRepository, PgUserRepository,
};
