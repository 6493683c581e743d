//! User service
//!
//! User listing with created-team and membership counts and, when the store
//! carries memberships, each user's teams.

use stock_core::entities::UserSummary;
use tracing::{debug, instrument};

use crate::dto::UserResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Newest users first, at most `limit`.
    ///
    /// `teams_count` counts teams the user created; `memberships_count` and
    /// `teams` come from the membership relation only.
    #[instrument(skip(self))]
    pub async fn list_users(&self, limit: i64) -> ServiceResult<Vec<UserResponse>> {
        let capability = self.ctx.schema_probe().membership_capability().await?;
        let summaries = self
            .ctx
            .user_repo()
            .list_with_counts(limit, capability)
            .await?;

        if !capability.is_available() {
            debug!(users = summaries.len(), "Membership relation absent, skipping team lists");
            return Ok(summaries.into_iter().map(UserResponse::from).collect());
        }

        let mut enriched: Vec<UserSummary> = Vec::with_capacity(summaries.len());
        for summary in summaries {
            let teams = self.ctx.membership_repo().find_by_user(summary.user.id).await?;
            enriched.push(summary.with_teams(teams));
        }

        Ok(enriched.into_iter().map(UserResponse::from).collect())
    }
}
