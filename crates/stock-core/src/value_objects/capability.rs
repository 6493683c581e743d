//! Optional schema capabilities

/// Whether the store carries the optional `team_memberships` relation.
///
/// Resolved once per enrichment call. `Absent` is a supported degraded
/// mode: every membership-derived count is zero and every membership
/// list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipCapability {
    Available,
    Absent,
}

impl MembershipCapability {
    /// Build from the result of a table-existence check
    #[inline]
    pub fn from_exists(exists: bool) -> Self {
        if exists {
            Self::Available
        } else {
            Self::Absent
        }
    }

    #[inline]
    pub fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}
