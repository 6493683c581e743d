//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every operation here is a read.

use async_trait::async_trait;

use crate::entities::{
    ItemWithLocation, Location, TeamMember, TeamSummary, TransactionWithItem, UserMembership,
    UserSummary,
};
use crate::error::DomainError;
use crate::value_objects::MembershipCapability;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Item Repository
// ============================================================================

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Newest items first, joined with their location name, at most `limit` rows
    async fn list_recent(&self, limit: i64) -> RepoResult<Vec<ItemWithLocation>>;

    /// Items with `current_stock <= minimum_stock`, ordered by ascending
    /// `current_stock - minimum_stock`
    async fn list_low_stock(&self) -> RepoResult<Vec<ItemWithLocation>>;
}

// ============================================================================
// Location Repository
// ============================================================================

#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// All locations ordered by name
    async fn list_by_name(&self) -> RepoResult<Vec<Location>>;
}

// ============================================================================
// Transaction Repository
// ============================================================================

#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Newest transactions first, joined with item name and SKU, at most `limit` rows
    async fn list_recent(&self, limit: i64) -> RepoResult<Vec<TransactionWithItem>>;
}

// ============================================================================
// Stats Repository
// ============================================================================

/// Independent aggregates behind the dashboard snapshot.
///
/// Each method is a single query with no ordering dependency on the others.
#[async_trait]
pub trait StatsRepository: Send + Sync {
    async fn count_items(&self) -> RepoResult<i64>;

    async fn count_locations(&self) -> RepoResult<i64>;

    async fn count_transactions(&self) -> RepoResult<i64>;

    /// Count items with `current_stock <= minimum_stock`
    async fn count_low_stock(&self) -> RepoResult<i64>;

    /// Sum of `current_stock * cost` over items with positive stock, 0 when none
    async fn total_inventory_value(&self) -> RepoResult<f64>;
}

// ============================================================================
// Team Repository
// ============================================================================

#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Newest teams first with member/item/location counts.
    ///
    /// With `MembershipCapability::Absent` the membership relation is never
    /// touched and `members_count` is 0. Member lists are left empty.
    async fn list_with_counts(
        &self,
        limit: i64,
        capability: MembershipCapability,
    ) -> RepoResult<Vec<TeamSummary>>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Newest users first with created-team and membership counts.
    ///
    /// With `MembershipCapability::Absent` the membership relation is never
    /// touched and `memberships_count` is 0. Team lists are left empty.
    async fn list_with_counts(
        &self,
        limit: i64,
        capability: MembershipCapability,
    ) -> RepoResult<Vec<UserSummary>>;
}

// ============================================================================
// Membership Repository
// ============================================================================

/// Reads of the optional `team_memberships` relation.
///
/// Callers must only use this after resolving `MembershipCapability::Available`.
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Every member of a team, with role and email
    async fn find_by_team(&self, team_id: i64) -> RepoResult<Vec<TeamMember>>;

    /// Every team a user belongs to, with role
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Vec<UserMembership>>;
}

// ============================================================================
// Schema Probe
// ============================================================================

#[async_trait]
pub trait SchemaProbe: Send + Sync {
    /// Check whether the store carries the optional membership relation
    async fn membership_capability(&self) -> RepoResult<MembershipCapability>;
}
