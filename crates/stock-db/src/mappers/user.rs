//! User model -> entity mapper

use stock_core::entities::{User, UserSummary};

use crate::models::{UserModel, UserWithCountsModel};

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            email: model.email,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<UserWithCountsModel> for UserSummary {
    fn from(model: UserWithCountsModel) -> Self {
        UserSummary::new(model.user.into(), model.teams_count, model.memberships_count)
    }
}
