//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Data Errors (a stored value outside the closed domain sets)
    // =========================================================================
    #[error("Invalid transaction type: {0}")]
    InvalidTransactionType(String),

    #[error("Invalid membership role: {0}")]
    InvalidMembershipRole(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidTransactionType(_) => "INVALID_TRANSACTION_TYPE",
            Self::InvalidMembershipRole(_) => "INVALID_MEMBERSHIP_ROLE",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }
}
