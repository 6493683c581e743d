//! Stock transaction entity - one recorded stock movement

use chrono::{DateTime, Utc};

use crate::value_objects::TransactionType;

/// Stock transaction entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockTransaction {
    pub id: i64,
    pub item_id: i64,
    pub team_id: i64,
    pub transaction_type: TransactionType,
    pub quantity: i32,
    pub notes: Option<String>,
    pub user_id: i64,
    pub source_location_id: Option<i64>,
    pub destination_location_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StockTransaction {
    /// Check if the transaction moved stock between two known locations
    pub fn is_complete_transfer(&self) -> bool {
        self.transaction_type.is_transfer()
            && self.source_location_id.is_some()
            && self.destination_location_id.is_some()
    }
}

/// Transaction joined with the name and SKU of its item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionWithItem {
    pub transaction: StockTransaction,
    pub item_name: String,
    pub sku: String,
}
