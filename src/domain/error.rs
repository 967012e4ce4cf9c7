//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use super::{AmountError, ValidationError};

/// Business rule violations raised by the Account and Customer aggregates.
///
/// These are rejections, not transient faults: retrying the same command
/// against the same state yields the same error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Negative or otherwise malformed amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),

    #[error("Account not found: {0}")]
    AccountNotFound(Uuid),

    #[error("Customer not found: {0}")]
    CustomerNotFound(Uuid),

    /// Account is closed and accepts no further transactions
    #[error("Account is closed: {0}")]
    AccountClosed(Uuid),

    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: Decimal, available: Decimal },

    /// Close requested while the balance is still positive
    #[error("Account {account_id} cannot be closed with outstanding balance {balance}")]
    AccountCannotBeClosed { account_id: Uuid, balance: Decimal },

    /// Malformed personal id or name
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A persisted ledger violates the account invariants
    #[error("Corrupt ledger for account {account_id}: {reason}")]
    CorruptLedger { account_id: Uuid, reason: String },
}

impl DomainError {
    /// Create an insufficient funds error
    pub fn insufficient_funds(required: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds { required, available }
    }

    /// Check if this is a client error (the command itself was rejected)
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::CorruptLedger { .. })
    }

    /// Stable machine-readable code for presenters
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "invalid_amount",
            Self::AccountNotFound(_) => "account_not_found",
            Self::CustomerNotFound(_) => "customer_not_found",
            Self::AccountClosed(_) => "account_closed",
            Self::InsufficientFunds { .. } => "insufficient_funds",
            Self::AccountCannotBeClosed { .. } => "account_cannot_be_closed",
            Self::Validation(_) => "validation_error",
            Self::CorruptLedger { .. } => "corrupt_ledger",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_funds_error() {
        let err = DomainError::insufficient_funds(Decimal::new(100, 0), Decimal::new(50, 0));

        assert!(err.is_client_error());
        assert_eq!(err.error_code(), "insufficient_funds");
        assert!(err.to_string().contains("100"));
        assert!(err.to_string().contains("50"));
    }

    #[test]
    fn test_from_amount_error() {
        let err: DomainError = AmountError::Negative(Decimal::new(-1, 0)).into();
        assert!(matches!(err, DomainError::InvalidAmount(_)));
        assert_eq!(err.error_code(), "invalid_amount");
    }

    #[test]
    fn test_from_validation_error() {
        let err: DomainError = ValidationError::EmptyName.into();
        assert!(matches!(err, DomainError::Validation(ValidationError::EmptyName)));
        assert!(err.to_string().contains("Name must not be empty"));
    }

    #[test]
    fn test_corrupt_ledger_is_not_client_error() {
        let err = DomainError::CorruptLedger {
            account_id: Uuid::new_v4(),
            reason: "negative balance".to_string(),
        };
        assert!(!err.is_client_error());
    }
}
