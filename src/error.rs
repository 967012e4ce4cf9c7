//! Error handling module
//!
//! Centralized error type returned to presenters and callers.

use serde::Serialize;

use crate::domain::DomainError;
use crate::ports::RepositoryError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    // Business rule rejections
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Infrastructure failures
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Serializable error body for presenters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    /// Business rejection, as opposed to an infrastructure failure
    pub fn is_business_error(&self) -> bool {
        matches!(self, AppError::Domain(e) if e.is_client_error())
    }

    /// Check if retrying the whole command may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Repository(e) if e.is_retryable())
    }

    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            AppError::Domain(e) => Some(e),
            _ => None,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Domain(e) => e.error_code(),
            AppError::Repository(RepositoryError::VersionConflict { .. }) => "version_conflict",
            AppError::Repository(RepositoryError::DuplicateCustomer(_)) => "duplicate_customer",
            AppError::Repository(_) => "repository_error",
            AppError::Config(_) => "config_error",
            AppError::Internal(_) => "internal_error",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        let details = match self {
            AppError::Domain(DomainError::InsufficientFunds { required, available }) => {
                Some(format!("required {}, available {}", required, available))
            }
            AppError::Domain(DomainError::AccountCannotBeClosed { balance, .. }) => {
                Some(format!("balance {}", balance))
            }
            AppError::Domain(DomainError::Validation(e)) => Some(e.to_string()),
            AppError::Repository(e) => Some(e.to_string()),
            _ => None,
        };

        ErrorResponse {
            error: self.to_string(),
            error_code: self.error_code().to_string(),
            details,
        }
    }
}
