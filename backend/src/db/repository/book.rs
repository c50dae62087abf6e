//! Core book repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{Book, BookFilter, BookId, NewBook};

/// Repository trait for book storage.
///
/// Implementations own persistence exclusively. Every method either returns
/// the value or a typed [`RepositoryError`](super::RepositoryError); failures
/// are never retried here.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to be shared across request handlers.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Check if the store is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if connection is healthy
    /// - `Ok(false)` if connection is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// List books, optionally restricted by `filter`.
    ///
    /// An empty filter returns the full collection. Ordering is backend-defined.
    async fn find_all(&self, filter: &BookFilter) -> RepositoryResult<Vec<Book>>;

    /// Retrieve one book.
    ///
    /// # Returns
    /// * `Ok(Book)` - The stored book
    /// * `Err(RepositoryError::NotFound)` - If no book has this id
    /// * `Err(RepositoryError)` - If the operation fails
    async fn find_by_id(&self, id: BookId) -> RepositoryResult<Book>;

    /// Persist a new book and return it with its assigned id.
    async fn create(&self, book: &NewBook) -> RepositoryResult<Book>;

    /// Remove every book, returning how many were removed.
    ///
    /// Administrative and test cleanup only; not exposed over HTTP.
    async fn delete_all(&self) -> RepositoryResult<usize>;
}
