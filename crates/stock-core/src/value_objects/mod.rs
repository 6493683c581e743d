//! Value objects - immutable types that represent domain concepts

mod capability;
mod membership_role;
mod transaction_type;

pub use capability::MembershipCapability;
pub use membership_role::MembershipRole;
pub use transaction_type::TransactionType;
