//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use stock_core::entities::{
    DashboardStats, ItemWithLocation, Location, TeamMember, TeamSummary, TransactionWithItem,
    UserMembership, UserSummary,
};

use super::responses::{
    DashboardStatsResponse, ItemResponse, LocationResponse, TeamMemberResponse, TeamResponse,
    TransactionResponse, UserResponse, UserTeamResponse,
};

// ============================================================================
// Inventory Mappers
// ============================================================================

impl From<ItemWithLocation> for ItemResponse {
    fn from(row: ItemWithLocation) -> Self {
        let item = row.item;
        Self {
            id: item.id,
            name: item.name,
            sku: item.sku,
            barcode: item.barcode,
            cost: item.cost,
            price: item.price,
            item_type: item.item_type,
            brand: item.brand,
            initial_quantity: item.initial_quantity,
            team_id: item.team_id,
            current_stock: item.current_stock,
            minimum_stock: item.minimum_stock,
            location_id: item.location_id,
            location_name: row.location_name,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        Self {
            id: location.id,
            name: location.name,
            description: location.description,
            team_id: location.team_id,
            created_at: location.created_at,
            updated_at: location.updated_at,
        }
    }
}

impl From<TransactionWithItem> for TransactionResponse {
    fn from(row: TransactionWithItem) -> Self {
        let tx = row.transaction;
        Self {
            id: tx.id,
            item_id: tx.item_id,
            team_id: tx.team_id,
            transaction_type: tx.transaction_type,
            quantity: tx.quantity,
            notes: tx.notes,
            user_id: tx.user_id,
            source_location_id: tx.source_location_id,
            destination_location_id: tx.destination_location_id,
            item_name: row.item_name,
            sku: row.sku,
            created_at: tx.created_at,
            updated_at: tx.updated_at,
        }
    }
}

impl From<DashboardStats> for DashboardStatsResponse {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_items: stats.total_items,
            total_locations: stats.total_locations,
            total_transactions: stats.total_transactions,
            low_stock_items: stats.low_stock_items,
            total_value: stats.total_value,
        }
    }
}

// ============================================================================
// Team and User Mappers
// ============================================================================

impl From<TeamMember> for TeamMemberResponse {
    fn from(member: TeamMember) -> Self {
        Self {
            user_id: member.user_id,
            email: member.email,
            role: member.role,
            joined_at: member.joined_at,
        }
    }
}

impl From<TeamSummary> for TeamResponse {
    fn from(summary: TeamSummary) -> Self {
        let team = summary.team;
        Self {
            id: team.id,
            name: team.name,
            notes: team.notes,
            user_id: team.user_id,
            user_name: summary.owner_email,
            members_count: summary.members_count,
            items_count: summary.items_count,
            locations_count: summary.locations_count,
            members: summary.members.into_iter().map(Into::into).collect(),
            created_at: team.created_at,
            updated_at: team.updated_at,
        }
    }
}

impl From<UserMembership> for UserTeamResponse {
    fn from(membership: UserMembership) -> Self {
        Self {
            team_id: membership.team_id,
            team_name: membership.team_name,
            role: membership.role,
            joined_at: membership.joined_at,
        }
    }
}

impl From<UserSummary> for UserResponse {
    fn from(summary: UserSummary) -> Self {
        let user = summary.user;
        Self {
            id: user.id,
            email: user.email,
            teams_count: summary.teams_count,
            memberships_count: summary.memberships_count,
            teams: summary.teams.into_iter().map(Into::into).collect(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
