//! Aggregate module
//!
//! The Customer aggregate root, the Account entities it owns, and the
//! ledger entries recorded on each account.

pub mod account;
pub mod customer;
pub mod transaction;

pub use account::{Account, AccountStatus};
pub use customer::Customer;
pub use transaction::{Transaction, TransactionKind};
