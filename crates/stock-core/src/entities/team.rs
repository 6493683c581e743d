//! Team entity - the owner of items, locations, and transactions

use chrono::{DateTime, Utc};

use super::membership::TeamMember;

/// Team entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub notes: Option<String>,
    /// The user who created the team
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Team with its derived counts and, when memberships are available, its members.
///
/// Counts are computed by the store on read; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSummary {
    pub team: Team,
    /// Email of the creating user
    pub owner_email: Option<String>,
    pub members_count: i64,
    pub items_count: i64,
    pub locations_count: i64,
    pub members: Vec<TeamMember>,
}

impl TeamSummary {
    /// Create a summary with no members attached yet
    pub fn new(
        team: Team,
        owner_email: Option<String>,
        members_count: i64,
        items_count: i64,
        locations_count: i64,
    ) -> Self {
        Self {
            team,
            owner_email,
            members_count,
            items_count,
            locations_count,
            members: Vec::new(),
        }
    }

    /// Attach the team's member list
    pub fn with_members(mut self, members: Vec<TeamMember>) -> Self {
        self.members = members;
        self
    }

    /// Members, items, and locations combined
    pub fn total_resources(&self) -> i64 {
        self.members_count + self.items_count + self.locations_count
    }
}
