//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Row DTOs keep the
//! store's snake_case column names; the dashboard snapshot uses camelCase keys.

use chrono::{DateTime, Utc};
use serde::Serialize;
use stock_core::value_objects::{MembershipRole, TransactionType};

// ============================================================================
// Inventory Responses
// ============================================================================

/// Item row with its location name
#[derive(Debug, Clone, Serialize)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub sku: String,
    pub barcode: Option<String>,
    pub cost: f64,
    pub price: f64,
    pub item_type: Option<String>,
    pub brand: Option<String>,
    pub initial_quantity: i32,
    pub team_id: i64,
    pub current_stock: i32,
    pub minimum_stock: i32,
    pub location_id: Option<i64>,
    pub location_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub team_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Stock transaction with the name and SKU of its item
#[derive(Debug, Clone, Serialize)]
pub struct TransactionResponse {
    pub id: i64,
    pub item_id: i64,
    pub team_id: i64,
    pub transaction_type: TransactionType,
    pub quantity: i32,
    pub notes: Option<String>,
    pub user_id: i64,
    pub source_location_id: Option<i64>,
    pub destination_location_id: Option<i64>,
    pub item_name: String,
    pub sku: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Dashboard Responses
// ============================================================================

/// Dashboard summary snapshot
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsResponse {
    pub total_items: i64,
    pub total_locations: i64,
    pub total_transactions: i64,
    pub low_stock_items: i64,
    pub total_value: f64,
}

// ============================================================================
// Team Responses
// ============================================================================

/// Team with derived counts and its member list
#[derive(Debug, Clone, Serialize)]
pub struct TeamResponse {
    pub id: i64,
    pub name: String,
    pub notes: Option<String>,
    pub user_id: i64,
    /// Email of the user who created the team
    pub user_name: Option<String>,
    pub members_count: i64,
    pub items_count: i64,
    pub locations_count: i64,
    pub members: Vec<TeamMemberResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamMemberResponse {
    pub user_id: i64,
    pub email: Option<String>,
    pub role: MembershipRole,
    pub joined_at: DateTime<Utc>,
}

// ============================================================================
// User Responses
// ============================================================================

/// User with derived counts and the teams they belong to
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    /// Teams this user created
    pub teams_count: i64,
    /// Teams this user belongs to through memberships
    pub memberships_count: i64,
    pub teams: Vec<UserTeamResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserTeamResponse {
    pub team_id: i64,
    pub team_name: Option<String>,
    pub role: MembershipRole,
    pub joined_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
