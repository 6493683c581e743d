//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User row with created-team and membership counts
#[derive(Debug, Clone, FromRow)]
pub struct UserWithCountsModel {
    #[sqlx(flatten)]
    pub user: UserModel,
    pub teams_count: i64,
    pub memberships_count: i64,
}
