//! In-memory repository and event bus implementations.
//!
//! Suitable for tests, demos, and as a reference for real adapters: the
//! repository enforces the same optimistic version check a database-backed
//! implementation must.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock as SyncRwLock;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::aggregate::Customer;
use crate::domain::BankingEvent;
use crate::ports::{CustomerReadRepository, CustomerWriteRepository, EventPublisher, RepositoryError};

#[derive(Debug, Default)]
struct Store {
    customers: HashMap<Uuid, Customer>,
    /// account ID -> owning customer ID
    account_index: HashMap<Uuid, Uuid>,
}

/// Customer repository backed by a map, implementing both read and write ports.
///
/// Each `save` runs under one write lock, so the version check and the write
/// are atomic per call.
#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    store: RwLock<Store>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored customers
    pub async fn len(&self) -> usize {
        self.store.read().await.customers.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CustomerReadRepository for InMemoryCustomerRepository {
    async fn get_by_account(&self, account_id: Uuid) -> Result<Customer, RepositoryError> {
        let store = self.store.read().await;
        let customer_id = store
            .account_index
            .get(&account_id)
            .ok_or(RepositoryError::AccountNotFound(account_id))?;

        store
            .customers
            .get(customer_id)
            .cloned()
            .ok_or(RepositoryError::CustomerNotFound(*customer_id))
    }

    async fn get_by_customer_id(&self, customer_id: Uuid) -> Result<Customer, RepositoryError> {
        self.store
            .read()
            .await
            .customers
            .get(&customer_id)
            .cloned()
            .ok_or(RepositoryError::CustomerNotFound(customer_id))
    }
}

#[async_trait]
impl CustomerWriteRepository for InMemoryCustomerRepository {
    async fn save(&self, customer: &Customer) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;

        let stored_version = store
            .customers
            .get(&customer.id())
            .map(Customer::version)
            .unwrap_or(0);

        // Check for version conflict
        if stored_version != customer.version() {
            tracing::warn!(
                customer_id = %customer.id(),
                expected = customer.version(),
                found = stored_version,
                "Concurrency conflict on save"
            );
            return Err(RepositoryError::VersionConflict {
                customer_id: customer.id(),
                expected: customer.version(),
                found: stored_version,
            });
        }

        // First write of a customer: personal ids are unique
        if stored_version == 0
            && store
                .customers
                .values()
                .any(|c| c.personal_id() == customer.personal_id())
        {
            return Err(RepositoryError::DuplicateCustomer(
                customer.personal_id().to_string(),
            ));
        }

        let mut stored = customer.clone();
        stored.set_version(stored_version + 1);

        for account_id in stored.account_ids() {
            store.account_index.insert(account_id, stored.id());
        }

        tracing::debug!(
            customer_id = %stored.id(),
            version = stored.version(),
            "Customer saved"
        );
        store.customers.insert(stored.id(), stored);
        Ok(())
    }
}

/// Event publisher that records everything it is given
#[derive(Debug, Default)]
pub struct InMemoryEventBus {
    events: SyncRwLock<Vec<BankingEvent>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of published events, oldest first
    pub fn events(&self) -> Vec<BankingEvent> {
        self.events.read().clone()
    }

    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: BankingEvent) {
        tracing::debug!(
            event_type = event.event_type(),
            customer_id = %event.customer_id(),
            account_id = %event.account_id(),
            "Event published"
        );
        self.events.write().push(event);
    }
}
