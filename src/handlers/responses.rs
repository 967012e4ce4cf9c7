//! Response definitions
//!
//! Plain data handed to presenters. Conversions from the aggregates live
//! here so handlers never format domain state themselves.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aggregate::{Account, AccountStatus, Customer, Transaction, TransactionKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub customer_id: Uuid,
    pub personal_id: String,
    pub name: String,
}

impl From<&Customer> for CustomerSummary {
    fn from(customer: &Customer) -> Self {
        Self {
            customer_id: customer.id(),
            personal_id: customer.personal_id().to_string(),
            name: customer.name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub transaction_id: Uuid,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<&Transaction> for TransactionSummary {
    fn from(transaction: &Transaction) -> Self {
        Self {
            transaction_id: transaction.id(),
            kind: transaction.kind(),
            amount: transaction.amount().value(),
            created_at: transaction.created_at(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub account_id: Uuid,
    pub status: AccountStatus,
    pub balance: Decimal,
    /// Ledger in insertion order
    pub transactions: Vec<TransactionSummary>,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            account_id: account.id(),
            status: account.status(),
            balance: account.balance().value(),
            transactions: account.transactions().iter().map(TransactionSummary::from).collect(),
        }
    }
}

/// Result of a successful registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub customer: CustomerSummary,
    pub account: AccountSummary,
}

/// Result of a successful account opening
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAccountResponse {
    pub customer_id: Uuid,
    pub account: AccountSummary,
}

/// Result of a deposit or withdrawal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub account_id: Uuid,
    pub transaction: TransactionSummary,
    /// Balance after the transaction
    pub balance: Decimal,
}

pub type DepositResponse = TransactionResponse;
pub type WithdrawResponse = TransactionResponse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloseAccountResponse {
    pub account_id: Uuid,
    pub status: AccountStatus,
    pub closed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountDetails {
    pub customer_id: Uuid,
    pub account: AccountSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub customer: CustomerSummary,
    pub accounts: Vec<AccountSummary>,
    pub total_balance: Decimal,
}

impl From<&Customer> for CustomerDetails {
    fn from(customer: &Customer) -> Self {
        Self {
            customer: CustomerSummary::from(customer),
            accounts: customer.accounts().map(AccountSummary::from).collect(),
            total_balance: customer.total_balance().value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Amount;

    #[test]
    fn test_customer_details_conversion() {
        let mut customer =
            Customer::register("08724050601", "Ivan Paulovich", Some(Amount::from_integer(300).unwrap()))
                .unwrap();
        customer.open_account(None).unwrap();

        let details = CustomerDetails::from(&customer);

        assert_eq!(details.customer.personal_id, "08724050601");
        assert_eq!(details.accounts.len(), 2);
        assert_eq!(details.total_balance, Decimal::new(300, 0));
    }

    #[test]
    fn test_account_summary_serialization() {
        let mut account = Account::open();
        account.deposit(Amount::from_integer(5).unwrap()).unwrap();

        let json = serde_json::to_value(AccountSummary::from(&account)).unwrap();

        assert_eq!(json["status"], "open");
        assert_eq!(json["transactions"][0]["kind"], "credit");
        assert_eq!(json["balance"], "5");
    }
}
