//! Item entity - a stocked article owned by a team

use chrono::{DateTime, Utc};

/// Item entity
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
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

impl Item {
    /// Check if the item sits at or below its minimum stock level
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.current_stock <= self.minimum_stock
    }

    /// Distance from the minimum stock level (negative when below it).
    /// Low-stock listings sort on this value, most urgent first.
    #[inline]
    pub fn stock_deficit(&self) -> i64 {
        i64::from(self.current_stock) - i64::from(self.minimum_stock)
    }

    /// Inventory value contributed by this item (zero unless stock is positive)
    pub fn stock_value(&self) -> f64 {
        if self.current_stock > 0 {
            f64::from(self.current_stock) * self.cost
        } else {
            0.0
        }
    }
}

/// Item joined with the name of its location
#[derive(Debug, Clone, PartialEq)]
pub struct ItemWithLocation {
    pub item: Item,
    pub location_name: Option<String>,
}

impl ItemWithLocation {
    pub fn new(item: Item, location_name: Option<String>) -> Self {
        Self {
            item,
            location_name,
        }
    }
}
