//! Membership model -> entity mappers

use stock_core::entities::{TeamMember, UserMembership};
use stock_core::error::DomainError;

use crate::models::{TeamMemberModel, UserMembershipModel};

impl TryFrom<TeamMemberModel> for TeamMember {
    type Error = DomainError;

    fn try_from(model: TeamMemberModel) -> Result<Self, Self::Error> {
        Ok(TeamMember {
            user_id: model.user_id,
            email: model.email,
            role: model.role.parse()?,
            joined_at: model.joined_at,
        })
    }
}

impl TryFrom<UserMembershipModel> for UserMembership {
    type Error = DomainError;

    fn try_from(model: UserMembershipModel) -> Result<Self, Self::Error> {
        Ok(UserMembership {
            team_id: model.team_id,
            team_name: model.team_name,
            role: model.role.parse()?,
            joined_at: model.joined_at,
        })
    }
}
