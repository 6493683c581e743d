//! Item model -> entity mapper

use stock_core::entities::{Item, ItemWithLocation};

use crate::models::{ItemModel, ItemWithLocationModel};

impl From<ItemModel> for Item {
    fn from(model: ItemModel) -> Self {
        Item {
            id: model.id,
            name: model.name,
            sku: model.sku,
            barcode: model.barcode,
            cost: model.cost,
            price: model.price,
            item_type: model.item_type,
            brand: model.brand,
            initial_quantity: model.initial_quantity,
            team_id: model.team_id,
            current_stock: model.current_stock,
            minimum_stock: model.minimum_stock,
            location_id: model.location_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<ItemWithLocationModel> for ItemWithLocation {
    fn from(model: ItemWithLocationModel) -> Self {
        ItemWithLocation::new(model.item.into(), model.location_name)
    }
}
