//! Team membership database models
//!
//! Both models are projections of `team_memberships` joined with the other side
//! of the relation. `role` is stored as text and parsed by the mappers.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A team's member: membership row left-joined with `users.email`
#[derive(Debug, Clone, FromRow)]
pub struct TeamMemberModel {
    pub user_id: i64,
    pub email: Option<String>,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

/// A user's team: membership row left-joined with `teams.name`
#[derive(Debug, Clone, FromRow)]
pub struct UserMembershipModel {
    pub team_id: i64,
    pub team_name: Option<String>,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}
