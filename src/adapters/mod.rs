//! Adapters
//!
//! In-memory implementations of the outbound ports.

mod in_memory;
mod presenter;

pub use in_memory::{InMemoryCustomerRepository, InMemoryEventBus};
pub use presenter::CapturingPresenter;
