//! Ports
//!
//! Collaborator contracts the use-case handlers depend on. Storage, message
//! bus and response formatting live behind these traits.

pub mod outbound;

pub use outbound::{
    CustomerReadRepository, CustomerWriteRepository, EventPublisher, Presenter, RepositoryError,
};
