//! # stock-core
//!
//! Domain layer containing inventory entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    DashboardStats, Item, ItemWithLocation, Location, StockTransaction, Team, TeamMember,
    TeamSummary, TransactionWithItem, User, UserMembership, UserSummary,
};
pub use error::DomainError;
pub use traits::{
    ItemRepository, LocationRepository, MembershipRepository, RepoResult, SchemaProbe,
    StatsRepository, TeamRepository, TransactionRepository, UserRepository,
};
pub use value_objects::{MembershipCapability, MembershipRole, TransactionType};
