//! Ledger entries
//!
//! A transaction is an immutable credit or debit recorded on one account.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Amount;

/// Direction of a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Credit,
    Debit,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Credit => "credit",
            TransactionKind::Debit => "debit",
        }
    }
}

/// A single entry in an account ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: Uuid,
    kind: TransactionKind,
    amount: Amount,
    created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn credit(amount: Amount) -> Self {
        Self::new(TransactionKind::Credit, amount)
    }

    pub fn debit(amount: Amount) -> Self {
        Self::new(TransactionKind::Debit, amount)
    }

    fn new(kind: TransactionKind, amount: Amount) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            created_at: Utc::now(),
        }
    }

    /// Rebuild a transaction read back from storage
    pub fn from_parts(
        id: Uuid,
        kind: TransactionKind,
        amount: Amount,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            kind,
            amount,
            created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_credit(&self) -> bool {
        self.kind == TransactionKind::Credit
    }

    /// Contribution of this entry to the balance: positive for credits,
    /// negative for debits.
    pub fn signed_value(&self) -> Decimal {
        match self.kind {
            TransactionKind::Credit => self.amount.value(),
            TransactionKind::Debit => -self.amount.value(),
        }
    }
}
