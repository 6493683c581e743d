//! User entity - an account of the inventory system

use chrono::{DateTime, Utc};

use super::membership::UserMembership;

/// User entity. The email is unique and doubles as the display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    #[inline]
    pub fn display_name(&self) -> &str {
        &self.email
    }
}

/// User with derived counts and, when memberships are available, the teams they belong to.
///
/// `teams_count` counts teams the user created; `memberships_count` counts
/// teams the user belongs to through `team_memberships`. The two differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub user: User,
    pub teams_count: i64,
    pub memberships_count: i64,
    pub teams: Vec<UserMembership>,
}

impl UserSummary {
    pub fn new(user: User, teams_count: i64, memberships_count: i64) -> Self {
        Self {
            user,
            teams_count,
            memberships_count,
            teams: Vec::new(),
        }
    }

    /// Attach the user's team memberships
    pub fn with_teams(mut self, teams: Vec<UserMembership>) -> Self {
        self.teams = teams;
        self
    }
}
