//! # Outbound Ports
//!
//! Traits for the persistence, event bus and presentation collaborators.

use async_trait::async_trait;
use uuid::Uuid;

use crate::aggregate::Customer;
use crate::domain::BankingEvent;
use crate::error::AppResult;

/// Errors reported by repository implementations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("No customer with id {0}")]
    CustomerNotFound(Uuid),

    #[error("No customer owns account {0}")]
    AccountNotFound(Uuid),

    /// Optimistic concurrency conflict
    #[error("Concurrency conflict for customer {customer_id}: expected version {expected}, found {found}")]
    VersionConflict {
        customer_id: Uuid,
        expected: u64,
        found: u64,
    },

    /// Personal id already registered to another customer
    #[error("Customer with personal id {0} already exists")]
    DuplicateCustomer(String),

    #[error("Repository unavailable: {0}")]
    Unavailable(String),
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RepositoryError::CustomerNotFound(_) | RepositoryError::AccountNotFound(_)
        )
    }

    /// Check if this error is retryable (re-running the whole command may succeed)
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            RepositoryError::VersionConflict { .. } | RepositoryError::Unavailable(_)
        )
    }
}

/// Read side of customer storage
#[async_trait]
pub trait CustomerReadRepository: Send + Sync {
    /// Load the customer owning `account_id`
    async fn get_by_account(&self, account_id: Uuid) -> Result<Customer, RepositoryError>;

    async fn get_by_customer_id(&self, customer_id: Uuid) -> Result<Customer, RepositoryError>;
}

/// Write side of customer storage.
///
/// `save` persists the whole customer graph (accounts and ledgers) atomically.
/// `customer.version()` is the version the caller loaded; implementations
/// must reject the write with `VersionConflict` when the stored version has
/// moved on, and otherwise store it under the next version.
#[async_trait]
pub trait CustomerWriteRepository: Send + Sync {
    async fn save(&self, customer: &Customer) -> Result<(), RepositoryError>;
}

/// Event bus. Fire-and-forget: delivery failures belong to the implementation.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: BankingEvent);
}

/// Receives the outcome of exactly one command
pub trait Presenter<R>: Send + Sync {
    fn populate(&self, result: AppResult<R>);
}
