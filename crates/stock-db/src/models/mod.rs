//! Database models - SQLx-compatible structs for PostgreSQL rows

mod item;
mod location;
mod membership;
mod team;
mod transaction;
mod user;

pub use item::{ItemModel, ItemWithLocationModel};
pub use location::LocationModel;
pub use membership::{TeamMemberModel, UserMembershipModel};
pub use team::{TeamModel, TeamWithCountsModel};
pub use transaction::{TransactionModel, TransactionWithItemModel};
pub use user::{UserModel, UserWithCountsModel};
