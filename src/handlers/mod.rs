//! Command Handlers module
//!
//! Use-case handlers that orchestrate business operations. Each handler
//! loads the customer aggregate, delegates the change to it, saves it,
//! publishes an event and hands the outcome to its presenter.

mod close_account_handler;
mod commands;
mod deposit_handler;
mod details_handler;
mod open_account_handler;
mod register_handler;
mod responses;
mod support;
mod withdraw_handler;

#[cfg(test)]
mod tests;

pub use close_account_handler::CloseAccountHandler;
pub use commands::*;
pub use deposit_handler::DepositHandler;
pub use details_handler::{GetAccountDetailsHandler, GetCustomerDetailsHandler};
pub use open_account_handler::OpenAccountHandler;
pub use register_handler::RegisterHandler;
pub use responses::*;
pub use withdraw_handler::WithdrawHandler;
