//! Stock transaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for stock_transactions table
#[derive(Debug, Clone, FromRow)]
pub struct TransactionModel {
    pub id: i64,
    pub item_id: i64,
    pub team_id: i64,
    pub transaction_type: String,
    pub quantity: i32,
    pub notes: Option<String>,
    pub user_id: i64,
    pub source_location_id: Option<i64>,
    pub destination_location_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Transaction row joined with its item's name and SKU
#[derive(Debug, Clone, FromRow)]
pub struct TransactionWithItemModel {
    #[sqlx(flatten)]
    pub transaction: TransactionModel,
    pub item_name: String,
    pub sku: String,
}
