//! Team membership views
//!
//! A membership row links a user to a team with a role. It is read from two
//! sides: a team lists its members, a user lists the teams they belong to.

use chrono::{DateTime, Utc};

use crate::value_objects::MembershipRole;

/// A member of a team, as seen from the team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub user_id: i64,
    /// `None` when the membership points at a user row that no longer exists
    pub email: Option<String>,
    pub role: MembershipRole,
    pub joined_at: DateTime<Utc>,
}

/// A team the user belongs to, as seen from the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMembership {
    pub team_id: i64,
    pub team_name: Option<String>,
    pub role: MembershipRole,
    pub joined_at: DateTime<Utc>,
}
