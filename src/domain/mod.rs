//! Domain layer - Business abstractions
//!
//! Records, request inputs, repository traits and the error taxonomy.
//! Nothing here talks to the database or to HTTP directly.

pub mod entities;
pub mod errors;
pub mod inputs;
pub mod repositories;

pub use entities::{Author, Book, Editorial, full_name};
pub use errors::DomainError;
pub use inputs::*;
pub use repositories::*;
