//! Domain module
//!
//! Core value objects, events and business errors.

pub mod amount;
pub mod error;
pub mod events;
pub mod identity;

pub use amount::{Amount, AmountError, Balance};
pub use error::DomainError;
pub use events::BankingEvent;
pub use identity::{Name, PersonalId, ValidationError};
