//! In-memory local repository implementation.
//!
//! Suitable for unit testing and local development. All data lives in memory
//! behind a `parking_lot::RwLock`, providing fast, deterministic, and isolated
//! execution.

use async_trait::async_trait;
use log::debug;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::db::repository::{BookRepository, ErrorContext, RepositoryError, RepositoryResult};
use crate::models::{Book, BookFilter, BookId, NewBook};

/// In-memory local repository.
///
/// Books are kept in insertion order, which is the order `find_all` returns.
///
/// # Example
/// ```
/// use bookshelf::db::repositories::LocalRepository;
/// use bookshelf::db::repository::BookRepository;
/// use bookshelf::models::{BookFilter, NewBook};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = LocalRepository::new();
/// repo.create(&NewBook::new("Dune")).await.unwrap();
///
/// let books = repo.find_all(&BookFilter::default()).await.unwrap();
/// assert_eq!(books.len(), 1);
/// # });
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    books: Vec<Book>,
    index: HashMap<BookId, usize>,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            books: Vec::new(),
            index: HashMap::new(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    ///
    /// While unhealthy, every operation fails with a connection error.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Get the number of books stored.
    pub fn book_count(&self) -> usize {
        self.data.read().books.len()
    }

    /// Check if a book exists.
    pub fn has_book(&self, id: BookId) -> bool {
        self.data.read().index.contains_key(&id)
    }

    fn check_health(data: &LocalData, operation: &str) -> RepositoryResult<()> {
        if !data.is_healthy {
            return Err(RepositoryError::connection("Database is not healthy")
                .in_context(ErrorContext::new(operation).with_entity("book")));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn find_all(&self, filter: &BookFilter) -> RepositoryResult<Vec<Book>> {
        let data = self.data.read();
        Self::check_health(&data, "find_all")?;

        Ok(data
            .books
            .iter()
            .filter(|book| filter.matches(book))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: BookId) -> RepositoryResult<Book> {
        let data = self.data.read();
        Self::check_health(&data, "find_by_id")?;

        data.index
            .get(&id)
            .map(|&position| data.books[position].clone())
            .ok_or_else(|| {
                RepositoryError::not_found(format!("Book {} not found", id)).in_context(
                    ErrorContext::new("find_by_id")
                        .with_entity("book")
                        .with_entity_id(id),
                )
            })
    }

    async fn create(&self, book: &NewBook) -> RepositoryResult<Book> {
        let mut data = self.data.write();
        Self::check_health(&data, "create")?;

        let mut id = BookId::generate();
        while data.index.contains_key(&id) {
            id = BookId::generate();
        }

        let stored = book.clone().into_book(id);
        let position = data.books.len();
        data.books.push(stored.clone());
        data.index.insert(id, position);

        debug!("Stored book {} ({} total)", id, data.books.len());
        Ok(stored)
    }

    async fn delete_all(&self) -> RepositoryResult<usize> {
        let mut data = self.data.write();
        Self::check_health(&data, "delete_all")?;

        let removed = data.books.len();
        data.books.clear();
        data.index.clear();
        Ok(removed)
    }
}
