//! Team service
//!
//! Team listing with derived counts and, when the store carries memberships,
//! each team's member list.

use stock_core::entities::TeamSummary;
use tracing::{debug, instrument};

use crate::dto::TeamResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Team service
pub struct TeamService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TeamService<'a> {
    /// Create a new TeamService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Newest teams first, at most `limit`.
    ///
    /// Member lists are loaded with one query per team, in row order.
    #[instrument(skip(self))]
    pub async fn list_teams(&self, limit: i64) -> ServiceResult<Vec<TeamResponse>> {
        let capability = self.ctx.schema_probe().membership_capability().await?;
        let summaries = self
            .ctx
            .team_repo()
            .list_with_counts(limit, capability)
            .await?;

        if !capability.is_available() {
            debug!(teams = summaries.len(), "Membership relation absent, skipping member lists");
            return Ok(summaries.into_iter().map(TeamResponse::from).collect());
        }

        let mut enriched: Vec<TeamSummary> = Vec::with_capacity(summaries.len());
        for summary in summaries {
            let members = self.ctx.membership_repo().find_by_team(summary.team.id).await?;
            enriched.push(summary.with_members(members));
        }

        Ok(enriched.into_iter().map(TeamResponse::from).collect())
    }
}
