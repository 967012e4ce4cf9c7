//! Command definitions
//!
//! Commands represent intentions to change the system state; queries only
//! read it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Command to register a customer with an initial account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterCommand {
    /// Personal identification number (personnummer)
    pub personal_id: String,
    pub name: String,
    /// Opening deposit; zero opens an empty account
    pub opening_amount: Decimal,
}

impl RegisterCommand {
    pub fn new(personal_id: impl Into<String>, name: impl Into<String>, opening_amount: Decimal) -> Self {
        Self {
            personal_id: personal_id.into(),
            name: name.into(),
            opening_amount,
        }
    }
}

/// Command to open an additional account for an existing customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAccountCommand {
    pub customer_id: Uuid,
    pub initial_amount: Decimal,
}

impl OpenAccountCommand {
    pub fn new(customer_id: Uuid, initial_amount: Decimal) -> Self {
        Self {
            customer_id,
            initial_amount,
        }
    }
}

/// Command to credit an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositCommand {
    pub account_id: Uuid,
    pub amount: Decimal,
}

impl DepositCommand {
    pub fn new(account_id: Uuid, amount: Decimal) -> Self {
        Self { account_id, amount }
    }
}

/// Command to debit an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawCommand {
    pub account_id: Uuid,
    pub amount: Decimal,
}

impl WithdrawCommand {
    pub fn new(account_id: Uuid, amount: Decimal) -> Self {
        Self { account_id, amount }
    }
}

/// Command to close an account with a zero balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloseAccountCommand {
    pub account_id: Uuid,
}

impl CloseAccountCommand {
    pub fn new(account_id: Uuid) -> Self {
        Self { account_id }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAccountDetailsQuery {
    pub account_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCustomerDetailsQuery {
    pub customer_id: Uuid,
}
