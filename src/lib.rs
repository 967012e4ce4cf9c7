//! bank_ledger Library
//!
//! Customer and account aggregates with an append-only transaction ledger,
//! plus the use-case handlers that drive them through narrow ports.

pub mod adapters;
pub mod aggregate;
pub mod config;
pub mod domain;
pub mod handlers;
pub mod ports;
pub mod telemetry;

mod error;

pub use config::Config;
pub use error::{AppError, AppResult, ErrorResponse};
pub use domain::{Amount, AmountError, Balance, BankingEvent, DomainError};
pub use aggregate::{Account, AccountStatus, Customer, Transaction, TransactionKind};
