//! Domain Events
//!
//! Events are immutable facts published after a command has been applied to
//! a customer aggregate and persisted.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events emitted by the banking use cases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BankingEvent {
    /// A customer was registered together with their first account
    CustomerRegistered {
        customer_id: Uuid,
        account_id: Uuid,
        personal_id: String,
        name: String,
        opening_amount: Decimal,
        registered_at: DateTime<Utc>,
    },

    /// An additional account was opened for an existing customer
    AccountOpened {
        customer_id: Uuid,
        account_id: Uuid,
        opened_at: DateTime<Utc>,
    },

    /// Money was credited to an account (balance increased)
    FundsDeposited {
        customer_id: Uuid,
        account_id: Uuid,
        transaction_id: Uuid,
        amount: Decimal,
        balance: Decimal,
        deposited_at: DateTime<Utc>,
    },

    /// Money was debited from an account (balance decreased)
    FundsWithdrawn {
        customer_id: Uuid,
        account_id: Uuid,
        transaction_id: Uuid,
        amount: Decimal,
        balance: Decimal,
        withdrawn_at: DateTime<Utc>,
    },

    /// Account reached its terminal state
    AccountClosed {
        customer_id: Uuid,
        account_id: Uuid,
        closed_at: DateTime<Utc>,
    },
}

impl BankingEvent {
    /// Get the event type as a string
    pub fn event_type(&self) -> &'static str {
        match self {
            BankingEvent::CustomerRegistered { .. } => "CustomerRegistered",
            BankingEvent::AccountOpened { .. } => "AccountOpened",
            BankingEvent::FundsDeposited { .. } => "FundsDeposited",
            BankingEvent::FundsWithdrawn { .. } => "FundsWithdrawn",
            BankingEvent::AccountClosed { .. } => "AccountClosed",
        }
    }

    /// Get the customer (aggregate) ID this event relates to
    pub fn customer_id(&self) -> Uuid {
        match self {
            BankingEvent::CustomerRegistered { customer_id, .. }
            | BankingEvent::AccountOpened { customer_id, .. }
            | BankingEvent::FundsDeposited { customer_id, .. }
            | BankingEvent::FundsWithdrawn { customer_id, .. }
            | BankingEvent::AccountClosed { customer_id, .. } => *customer_id,
        }
    }

    /// Get the account ID this event relates to
    pub fn account_id(&self) -> Uuid {
        match self {
            BankingEvent::CustomerRegistered { account_id, .. }
            | BankingEvent::AccountOpened { account_id, .. }
            | BankingEvent::FundsDeposited { account_id, .. }
            | BankingEvent::FundsWithdrawn { account_id, .. }
            | BankingEvent::AccountClosed { account_id, .. } => *account_id,
        }
    }
}
