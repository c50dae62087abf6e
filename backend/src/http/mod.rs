//! HTTP server module.
//!
//! Exposes the book repository as a REST API over axum.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and validation                         │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, request tracing, error responses                 │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Repository Layer (db/)                                   │
//! │  - LocalRepository / PostgresRepository                   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Routes
//!
//! | Method | Path                   | Handler                 |
//! |--------|------------------------|-------------------------|
//! | GET    | `/`                    | [`handlers::welcome`]    |
//! | GET    | `/api/books`           | [`handlers::list_books`] |
//! | GET    | `/api/books/{book_id}` | [`handlers::get_book`]   |
//! | POST   | `/api/books`           | [`handlers::create_book`]|

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
