//! Services Layer
//!
//! Business rules for each resource family, written against the repository
//! traits. Handlers and the demo seed both go through here.

pub mod author_service;
pub mod book_service;
pub mod editorial_service;

pub use author_service::*;
pub use book_service::*;
pub use editorial_service::*;
