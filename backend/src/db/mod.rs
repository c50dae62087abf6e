//! Database module for book storage.
//!
//! This module provides abstractions for database operations via the Repository pattern,
//! allowing different storage backends to be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP handlers (http/)                                  │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │  Arc<dyn BookRepository>
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴────────────────┐
//!     │                                 │
//! ┌───▼──────────────┐     ┌──────────▼──────────────┐
//! │ Postgres (Diesel)│     │ Local Repository        │
//! │ postgres-repo    │     │ (in-memory)             │
//! └──────────────────┘     └─────────────────────────┘
//! ```
//!
//! The repository is built once at startup by [`RepositoryFactory`] and handed to
//! the HTTP layer as explicit state. There is no process-wide singleton.
//!
//! # Usage
//!
//! ```no_run
//! use bookshelf::db::RepositoryFactory;
//! use bookshelf::models::BookFilter;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = RepositoryFactory::from_env().await?;
//! let books = repo.find_all(&BookFilter::default()).await?;
//! println!("Found {} books", books.len());
//! # Ok(())
//! # }
//! ```

#[cfg(not(any(feature = "postgres-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;

// Postgres config is colocated with the repository implementation.
#[cfg(feature = "postgres-repo")]
pub use repositories::postgres::PostgresConfig;
#[cfg(not(feature = "postgres-repo"))]
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    _private: (),
}

pub use factory::{RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
pub use repositories::LocalRepository;
#[cfg(feature = "postgres-repo")]
pub use repositories::PostgresRepository;
pub use repository::{BookRepository, ErrorContext, RepositoryError, RepositoryResult};

/// Whether the process runs against the test database (`ENV=Test`).
pub fn is_test_env() -> bool {
    std::env::var("ENV")
        .map(|v| v.eq_ignore_ascii_case("test"))
        .unwrap_or(false)
}

/// `TEST_DATABASE_URL`, but only under `ENV=Test`.
///
/// Destructive test suites connect through this and nothing else, so a
/// regular `DATABASE_URL` left in the shell is never wiped.
pub fn test_database_url() -> Option<String> {
    if !is_test_env() {
        return None;
    }
    std::env::var("TEST_DATABASE_URL")
        .ok()
        .filter(|url| !url.is_empty())
}

/// Resolve the Postgres connection string from the environment.
///
/// With `ENV=Test`, `TEST_DATABASE_URL` wins when set so integration runs never
/// touch the regular database. Otherwise `DATABASE_URL`, then `PG_DATABASE_URL`.
pub fn database_url_from_env() -> Option<String> {
    if let Some(url) = test_database_url() {
        return Some(url);
    }

    std::env::var("DATABASE_URL")
        .or_else(|_| std::env::var("PG_DATABASE_URL"))
        .ok()
}
