//! Postgres repository implementation using Diesel.
//!
//! ## Features
//!
//! - Connection pooling with r2d2, opened once at startup
//! - Automatic migration execution
//! - Blocking Diesel calls run on Tokio's blocking pool
//!
//! Failures are reported once and never retried.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `DATABASE_URL` or `PG_DATABASE_URL`: Connection string (required)
//! - `ENV=Test` together with `TEST_DATABASE_URL`: connection string used for test runs
//! - `PG_POOL_MAX`: Maximum pool size (default: 10)
//! - `PG_POOL_MIN`: Minimum pool size (default: 1)
//! - `PG_CONN_TIMEOUT_SEC`: Connection timeout in seconds (default: 30)
//! - `PG_IDLE_TIMEOUT_SEC`: Idle connection timeout in seconds (default: 600)

use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::{debug, info};
use std::time::Duration;
use tokio::task;

use crate::db::repository::{BookRepository, ErrorContext, RepositoryError, RepositoryResult};
use crate::models::{Book, BookFilter, BookId, NewBook};

mod models;
mod schema;

use models::*;
use schema::books;

type PgPool = Pool<ConnectionManager<PgConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("src/db/repositories/postgres/migrations");

/// Configuration for connecting to Postgres.
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database connection URL
    pub database_url: String,
    /// Maximum number of connections in the pool
    pub max_pool_size: u32,
    /// Minimum number of connections in the pool
    pub min_pool_size: u32,
    /// Connection timeout in seconds
    pub connection_timeout_sec: u64,
    /// Idle connection timeout in seconds
    pub idle_timeout_sec: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            max_pool_size: 10,
            min_pool_size: 1,
            connection_timeout_sec: 30,
            idle_timeout_sec: 600,
        }
    }
}

impl PostgresConfig {
    /// Create configuration from environment variables.
    ///
    /// See the module documentation for the variables read.
    pub fn from_env() -> Result<Self, String> {
        let database_url = crate::db::database_url_from_env()
            .ok_or_else(|| "DATABASE_URL or PG_DATABASE_URL must be set".to_string())?;

        let max_pool_size = std::env::var("PG_POOL_MAX")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);

        let min_pool_size = std::env::var("PG_POOL_MIN")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(1);

        let connection_timeout_sec = std::env::var("PG_CONN_TIMEOUT_SEC")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        let idle_timeout_sec = std::env::var("PG_IDLE_TIMEOUT_SEC")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(600);

        Ok(Self {
            database_url,
            max_pool_size,
            min_pool_size,
            connection_timeout_sec,
            idle_timeout_sec,
        })
    }

    /// Create a new configuration with a database URL.
    pub fn with_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Default::default()
        }
    }
}

/// Diesel-backed repository for Postgres.
#[derive(Clone, Debug)]
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Create a new repository and run pending migrations.
    ///
    /// # Returns
    /// * `Ok(PostgresRepository)` on success
    /// * `Err(RepositoryError)` if connection or migration fails
    pub fn new(config: PostgresConfig) -> RepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(&config.database_url);

        let pool = Pool::builder()
            .max_size(config.max_pool_size)
            .min_idle(Some(config.min_pool_size))
            .connection_timeout(Duration::from_secs(config.connection_timeout_sec))
            .idle_timeout(Some(Duration::from_secs(config.idle_timeout_sec)))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| {
                RepositoryError::connection(e.to_string()).in_context(
                    ErrorContext::new("create_pool")
                        .with_details(format!("max_size={}", config.max_pool_size)),
                )
            })?;

        {
            let mut conn = pool.get().map_err(|e| {
                RepositoryError::connection(e.to_string())
                    .in_context(ErrorContext::new("get_connection_for_migrations"))
            })?;
            Self::run_migrations(&mut conn)?;
        }

        info!(
            "Postgres pool ready (max_size={}, min_idle={})",
            config.max_pool_size, config.min_pool_size
        );

        Ok(Self { pool })
    }

    fn run_migrations(conn: &mut PgConnection) -> RepositoryResult<()> {
        conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
            RepositoryError::internal(format!("Migration failed: {}", e))
                .in_context(ErrorContext::new("run_migrations"))
        })?;

        Ok(())
    }

    /// Run `f` with a pooled connection on the blocking thread pool.
    async fn with_conn<T, F>(&self, operation: &'static str, f: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();

        task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(|e| {
                RepositoryError::connection(e.to_string())
                    .in_context(ErrorContext::new(operation).with_entity("book"))
            })?;
            f(&mut conn).map_err(|e| e.with_operation(operation))
        })
        .await
        .map_err(|e| {
            RepositoryError::internal(format!("Task join error: {}", e))
                .in_context(ErrorContext::new("spawn_blocking"))
        })?
    }
}

#[async_trait]
impl BookRepository for PostgresRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        self.with_conn("health_check", |conn| {
            diesel::sql_query("SELECT 1")
                .execute(conn)
                .map(|_| true)
                .map_err(RepositoryError::from)
        })
        .await
    }

    async fn find_all(&self, filter: &BookFilter) -> RepositoryResult<Vec<Book>> {
        let genre = filter.genre.clone();

        self.with_conn("find_all", move |conn| {
            let mut query = books::table.select(BookRow::as_select()).into_boxed();
            if let Some(genre) = genre {
                query = query.filter(books::genre.eq(genre));
            }

            let rows = query.load::<BookRow>(conn)?;
            debug!("find_all returned {} rows", rows.len());
            Ok(rows.into_iter().map(Book::from).collect())
        })
        .await
    }

    async fn find_by_id(&self, id: BookId) -> RepositoryResult<Book> {
        self.with_conn("find_by_id", move |conn| {
            books::table
                .find(id.value())
                .select(BookRow::as_select())
                .first::<BookRow>(conn)
                .optional()?
                .map(Book::from)
                .ok_or_else(|| {
                    RepositoryError::not_found(format!("Book {} not found", id)).in_context(
                        ErrorContext::new("find_by_id")
                            .with_entity("book")
                            .with_entity_id(id),
                    )
                })
        })
        .await
    }

    async fn create(&self, book: &NewBook) -> RepositoryResult<Book> {
        let row = NewBookRow::from_new_book(BookId::generate(), book);

        self.with_conn("create", move |conn| {
            let stored = diesel::insert_into(books::table)
                .values(&row)
                .returning(BookRow::as_returning())
                .get_result::<BookRow>(conn)?;
            Ok(Book::from(stored))
        })
        .await
    }

    async fn delete_all(&self) -> RepositoryResult<usize> {
        self.with_conn("delete_all", |conn| {
            Ok(diesel::delete(books::table).execute(conn)?)
        })
        .await
    }
}
