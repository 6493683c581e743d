//! Stock transaction model -> entity mapper

use stock_core::entities::{StockTransaction, TransactionWithItem};
use stock_core::error::DomainError;

use crate::models::{TransactionModel, TransactionWithItemModel};

/// Fails when `transaction_type` holds a value outside the known kinds
impl TryFrom<TransactionModel> for StockTransaction {
    type Error = DomainError;

    fn try_from(model: TransactionModel) -> Result<Self, Self::Error> {
        Ok(StockTransaction {
            id: model.id,
            item_id: model.item_id,
            team_id: model.team_id,
            transaction_type: model.transaction_type.parse()?,
            quantity: model.quantity,
            notes: model.notes,
            user_id: model.user_id,
            source_location_id: model.source_location_id,
            destination_location_id: model.destination_location_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl TryFrom<TransactionWithItemModel> for TransactionWithItem {
    type Error = DomainError;

    fn try_from(model: TransactionWithItemModel) -> Result<Self, Self::Error> {
        Ok(TransactionWithItem {
            transaction: model.transaction.try_into()?,
            item_name: model.item_name,
            sku: model.sku,
        })
    }
}
