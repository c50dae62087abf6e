//! Domain models for the book catalog.

pub mod book;
pub mod macros;

pub use book::*;
