//! Domain traits (ports implemented by the infrastructure layer)

mod repositories;

pub use repositories::{
    ItemRepository, LocationRepository, MembershipRepository, RepoResult, SchemaProbe,
    StatsRepository, TeamRepository, TransactionRepository, UserRepository,
};
