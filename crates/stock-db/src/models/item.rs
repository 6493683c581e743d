//! Item database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for items table (`cost` and `price` selected as FLOAT8)
#[derive(Debug, Clone, FromRow)]
pub struct ItemModel {
    pub id: i64,
    pub name: String,
    pub sku: String,
    pub barcode: Option<String>,
    pub cost: f64,
    pub price: f64,
    pub item_type: Option<String>,
    pub brand: Option<String>,
    pub initial_quantity: i32,
    pub team_id: i64,
    pub current_stock: i32,
    pub minimum_stock: i32,
    pub location_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Item row left-joined with `locations.name`
#[derive(Debug, Clone, FromRow)]
pub struct ItemWithLocationModel {
    #[sqlx(flatten)]
    pub item: ItemModel,
    pub location_name: Option<String>,
}
