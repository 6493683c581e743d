//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in stock-core.
//! Each repository handles the reads for a specific domain entity.

mod error;
mod item;
mod location;
mod membership;
mod schema;
mod stats;
mod team;
mod transaction;
mod user;

pub use item::PgItemRepository;
pub use location::PgLocationRepository;
pub use membership::PgMembershipRepository;
pub use schema::PgSchemaProbe;
pub use stats::PgStatsRepository;
pub use team::PgTeamRepository;
pub use transaction::PgTransactionRepository;
pub use user::PgUserRepository;
