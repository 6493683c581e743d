//! Location model -> entity mapper

use stock_core::entities::Location;

use crate::models::LocationModel;

impl From<LocationModel> for Location {
    fn from(model: LocationModel) -> Self {
        Location {
            id: model.id,
            name: model.name,
            description: model.description,
            team_id: model.team_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
