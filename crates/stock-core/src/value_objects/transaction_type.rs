//! Stock transaction kinds

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The closed set of movements recorded in `stock_transactions`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Goods received into stock
    StockIn,
    /// Goods leaving stock
    StockOut,
    /// Manual correction of the stock level
    Adjust,
    /// Transfer between two locations
    Move,
    /// Physical count
    Count,
}

impl TransactionType {
    /// All kinds, in declaration order
    pub const ALL: [Self; 5] = [
        Self::StockIn,
        Self::StockOut,
        Self::Adjust,
        Self::Move,
        Self::Count,
    ];

    /// Get the stored string form
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StockIn => "stock_in",
            Self::StockOut => "stock_out",
            Self::Adjust => "adjust",
            Self::Move => "move",
            Self::Count => "count",
        }
    }

    /// Check if this kind references both a source and a destination location
    #[inline]
    pub fn is_transfer(self) -> bool {
        matches!(self, Self::Move)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::InvalidTransactionType(s.to_string()))
    }
}
