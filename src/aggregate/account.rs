//! Account Entity
//!
//! An account owns an append-only ledger of credits and debits. The balance
//! is always recomputed from the ledger and is never stored on its own.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Amount, Balance, DomainError};

use super::transaction::Transaction;

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Open,
    Closed,
}

impl Default for AccountStatus {
    fn default() -> Self {
        Self::Open
    }
}

/// Account
///
/// # Invariants
/// - `balance() >= 0` after every accepted operation
/// - a Closed account has a zero balance and accepts no further transactions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    /// Unique account ID
    id: Uuid,

    status: AccountStatus,

    /// Ledger in insertion order (the audit trail)
    ledger: Vec<Transaction>,

    opened_at: DateTime<Utc>,

    closed_at: Option<DateTime<Utc>>,
}

impl Account {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Open a new, empty account with a fresh ID
    pub fn open() -> Self {
        Self::open_with_id(Uuid::new_v4())
    }

    pub fn open_with_id(id: Uuid) -> Self {
        Self {
            id,
            status: AccountStatus::Open,
            ledger: Vec::new(),
            opened_at: Utc::now(),
            closed_at: None,
        }
    }

    /// Rebuild an account from persisted state.
    ///
    /// The ledger is replayed in order; a ledger that would ever drive the
    /// balance below zero, or a closed account that still holds funds, is
    /// rejected with `DomainError::CorruptLedger`.
    pub fn restore(
        id: Uuid,
        opened_at: DateTime<Utc>,
        ledger: Vec<Transaction>,
        closed_at: Option<DateTime<Utc>>,
    ) -> Result<Self, DomainError> {
        let mut running = Decimal::ZERO;
        for (position, transaction) in ledger.iter().enumerate() {
            running += transaction.signed_value();
            if running < Decimal::ZERO {
                return Err(DomainError::CorruptLedger {
                    account_id: id,
                    reason: format!(
                        "balance drops to {} at entry {} ({})",
                        running,
                        position,
                        transaction.id()
                    ),
                });
            }
        }

        if closed_at.is_some() && running > Decimal::ZERO {
            return Err(DomainError::CorruptLedger {
                account_id: id,
                reason: format!("closed account holds balance {}", running),
            });
        }

        let status = match closed_at {
            Some(_) => AccountStatus::Closed,
            None => AccountStatus::Open,
        };

        Ok(Self {
            id,
            status,
            ledger,
            opened_at,
            closed_at,
        })
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Deposit money: appends a Credit entry.
    ///
    /// Zero amounts are accepted and recorded.
    pub fn deposit(&mut self, amount: Amount) -> Result<Transaction, DomainError> {
        self.ensure_open()?;

        let transaction = Transaction::credit(amount);
        self.ledger.push(transaction.clone());

        tracing::debug!(
            account_id = %self.id,
            amount = %amount,
            transaction_id = %transaction.id(),
            "Credit appended"
        );
        Ok(transaction)
    }

    /// Withdraw money: appends a Debit entry when the balance covers it.
    ///
    /// On rejection the ledger is left untouched.
    pub fn withdraw(&mut self, amount: Amount) -> Result<Transaction, DomainError> {
        self.ensure_open()?;

        let balance = self.balance();
        if !balance.is_sufficient_for(&amount) {
            tracing::debug!(
                account_id = %self.id,
                required = %amount,
                available = %balance,
                "Debit rejected: insufficient funds"
            );
            return Err(DomainError::insufficient_funds(amount.value(), balance.value()));
        }

        let transaction = Transaction::debit(amount);
        self.ledger.push(transaction.clone());

        tracing::debug!(
            account_id = %self.id,
            amount = %amount,
            transaction_id = %transaction.id(),
            "Debit appended"
        );
        Ok(transaction)
    }

    /// Close the account.
    ///
    /// Fails while the balance is positive. Closing an already closed
    /// account is a no-op.
    pub fn close(&mut self) -> Result<(), DomainError> {
        if self.status == AccountStatus::Closed {
            return Ok(());
        }

        let balance = self.balance();
        if !balance.is_zero() {
            tracing::debug!(
                account_id = %self.id,
                balance = %balance,
                "Close rejected: outstanding balance"
            );
            return Err(DomainError::AccountCannotBeClosed {
                account_id: self.id,
                balance: balance.value(),
            });
        }

        self.status = AccountStatus::Closed;
        self.closed_at = Some(Utc::now());

        tracing::debug!(account_id = %self.id, "Account closed");
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), DomainError> {
        if self.status == AccountStatus::Closed {
            return Err(DomainError::AccountClosed(self.id));
        }
        Ok(())
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Sum of credits minus sum of debits, recomputed from the ledger
    pub fn balance(&self) -> Balance {
        let total: Decimal = self.ledger.iter().map(Transaction::signed_value).sum();
        Balance::from_decimal_unchecked(total)
    }

    pub fn status(&self) -> AccountStatus {
        self.status
    }

    pub fn is_open(&self) -> bool {
        self.status == AccountStatus::Open
    }

    pub fn is_closed(&self) -> bool {
        self.status == AccountStatus::Closed
    }

    /// Ledger entries in the order they were appended
    pub fn transactions(&self) -> &[Transaction] {
        &self.ledger
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    pub fn closed_at(&self) -> Option<DateTime<Utc>> {
        self.closed_at
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::open()
    }
}
