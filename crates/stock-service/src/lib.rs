//! # stock-service
//!
//! Application layer: aggregation, per-row enrichment, and response DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    DashboardStatsResponse, HealthChecks, HealthResponse, ItemResponse, LocationResponse,
    ReadinessResponse, TeamMemberResponse, TeamResponse, TransactionResponse, UserResponse,
    UserTeamResponse,
};
pub use services::{
    HealthService, InventoryService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, StatsService, TeamService, UserService,
};
