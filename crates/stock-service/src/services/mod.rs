//! Business logic services
//!
//! Services read through the repository traits held by `ServiceContext` and
//! shape the results into response DTOs.

pub mod context;
pub mod error;
pub mod health;
pub mod inventory;
pub mod stats;
pub mod team;
pub mod user;


// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use health::HealthService;
pub use inventory::InventoryService;
pub use stats::StatsService;
pub use team::TeamService;
pub use user::UserService;
