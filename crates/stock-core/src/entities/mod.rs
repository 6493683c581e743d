//! Domain entities - core business objects

mod item;
mod location;
mod membership;
mod stats;
mod team;
mod transaction;
mod user;

pub use item::{Item, ItemWithLocation};
pub use location::Location;
pub use membership::{TeamMember, UserMembership};
pub use stats::DashboardStats;
pub use team::{Team, TeamSummary};
pub use transaction::{StockTransaction, TransactionWithItem};
pub use user::{User, UserSummary};
