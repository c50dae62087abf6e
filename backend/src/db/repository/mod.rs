//! Repository trait definitions for book persistence.
//!
//! - [`error`]: Error types for repository operations
//! - [`book`]: The [`BookRepository`] trait
//!
//! Handlers only ever see `Arc<dyn BookRepository>`; which backend sits behind
//! it is decided once at startup by [`crate::db::RepositoryFactory`].

pub mod book;
pub mod error;

pub use book::BookRepository;
pub use error::{ErrorContext, RepositoryError, RepositoryResult};
