//! # Bookshelf
//!
//! A small book-catalog REST API.
//!
//! ## Architecture
//!
//! - [`models`]: the `Book` record, its insert shape and the list filter
//! - [`db`]: repository trait, in-memory and Postgres backends, backend factory
//! - [`http`]: axum router, handlers and error responses
//! - [`config`]: listening address from the environment
//!
//! ## Quick start
//!
//! ```no_run
//! use bookshelf::db::RepositoryFactory;
//! use bookshelf::http::{create_router, AppState};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let repository = RepositoryFactory::create_local();
//! let app = create_router(AppState::new(repository));
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod db;
pub mod models;

#[cfg(feature = "http-server")]
pub mod http;
