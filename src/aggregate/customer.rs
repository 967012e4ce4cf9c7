//! Customer Aggregate
//!
//! The customer is the consistency boundary: it exclusively owns its
//! accounts, and the only route to a mutable account is through it.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Amount, Balance, DomainError, Name, PersonalId};

use super::account::Account;
use super::transaction::Transaction;

/// Customer Aggregate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    /// Unique customer ID
    id: Uuid,

    personal_id: PersonalId,

    name: Name,

    /// Owned accounts keyed by account ID
    accounts: BTreeMap<Uuid, Account>,

    /// Persisted version, used as the optimistic-concurrency token on save.
    /// Zero means the customer has never been stored.
    version: u64,

    registered_at: DateTime<Utc>,
}

impl Customer {
    // =========================================================================
    // Registration
    // =========================================================================

    /// Register a new customer with one opened account.
    ///
    /// The account is seeded with a single Credit when `opening` is given.
    pub fn register(
        personal_id: &str,
        name: &str,
        opening: Option<Amount>,
    ) -> Result<Self, DomainError> {
        let personal_id = PersonalId::new(personal_id)?;
        let name = Name::new(name)?;

        let mut customer = Self::new(Uuid::new_v4(), personal_id, name);
        customer.open_account(opening)?;
        Ok(customer)
    }

    /// Create a customer without accounts
    pub fn new(id: Uuid, personal_id: PersonalId, name: Name) -> Self {
        Self {
            id,
            personal_id,
            name,
            accounts: BTreeMap::new(),
            version: 0,
            registered_at: Utc::now(),
        }
    }

    /// Rebuild a customer from persisted state
    pub fn restore(
        id: Uuid,
        personal_id: PersonalId,
        name: Name,
        accounts: Vec<Account>,
        version: u64,
        registered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            personal_id,
            name,
            accounts: accounts.into_iter().map(|a| (a.id(), a)).collect(),
            version,
            registered_at,
        }
    }

    // =========================================================================
    // Account ownership
    // =========================================================================

    /// Open a new account owned by this customer, returning its ID
    pub fn open_account(&mut self, initial: Option<Amount>) -> Result<Uuid, DomainError> {
        let mut account = Account::open();
        if let Some(amount) = initial {
            account.deposit(amount)?;
        }

        let account_id = account.id();
        self.accounts.insert(account_id, account);

        tracing::debug!(customer_id = %self.id, account_id = %account_id, "Account opened");
        Ok(account_id)
    }

    pub fn find_account(&self, account_id: Uuid) -> Result<&Account, DomainError> {
        self.accounts
            .get(&account_id)
            .ok_or(DomainError::AccountNotFound(account_id))
    }

    pub fn find_account_mut(&mut self, account_id: Uuid) -> Result<&mut Account, DomainError> {
        self.accounts
            .get_mut(&account_id)
            .ok_or(DomainError::AccountNotFound(account_id))
    }

    pub fn owns_account(&self, account_id: Uuid) -> bool {
        self.accounts.contains_key(&account_id)
    }

    pub fn deposit(&mut self, account_id: Uuid, amount: Amount) -> Result<Transaction, DomainError> {
        self.find_account_mut(account_id)?.deposit(amount)
    }

    pub fn withdraw(&mut self, account_id: Uuid, amount: Amount) -> Result<Transaction, DomainError> {
        self.find_account_mut(account_id)?.withdraw(amount)
    }

    pub fn close_account(&mut self, account_id: Uuid) -> Result<(), DomainError> {
        self.find_account_mut(account_id)?.close()
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn personal_id(&self) -> &PersonalId {
        &self.personal_id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn account_ids(&self) -> impl Iterator<Item = Uuid> + '_ {
        self.accounts.keys().copied()
    }

    /// Sum of balances across all owned accounts
    pub fn total_balance(&self) -> Balance {
        let total: Decimal = self.accounts.values().map(|a| a.balance().value()).sum();
        Balance::from_decimal_unchecked(total)
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Record the version assigned by a repository after a successful write
    pub fn set_version(&mut self, version: u64) {
        self.version = version;
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}
