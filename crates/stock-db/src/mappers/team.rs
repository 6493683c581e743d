//! Team model -> entity mapper

use stock_core::entities::{Team, TeamSummary};

use crate::models::{TeamModel, TeamWithCountsModel};

impl From<TeamModel> for Team {
    fn from(model: TeamModel) -> Self {
        Team {
            id: model.id,
            name: model.name,
            notes: model.notes,
            user_id: model.user_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Members are attached later by the service layer
impl From<TeamWithCountsModel> for TeamSummary {
    fn from(model: TeamWithCountsModel) -> Self {
        TeamSummary::new(
            model.team.into(),
            model.owner_email,
            model.members_count,
            model.items_count,
            model.locations_count,
        )
    }
}
