//! Team database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for teams table
#[derive(Debug, Clone, FromRow)]
pub struct TeamModel {
    pub id: i64,
    pub name: String,
    pub notes: Option<String>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Team row with owner email and grouped child counts
#[derive(Debug, Clone, FromRow)]
pub struct TeamWithCountsModel {
    #[sqlx(flatten)]
    pub team: TeamModel,
    pub owner_email: Option<String>,
    pub members_count: i64,
    pub items_count: i64,
    pub locations_count: i64,
}
