//! Router configuration for the HTTP API.
//!
//! This module sets up all routes and middleware (CORS, tracing) and creates
//! the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
///
/// Unknown paths fall through to axum's default 404.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let books = Router::new()
        .route("/books", get(handlers::list_books).post(handlers::create_book))
        .route("/books/{book_id}", get(handlers::get_book));

    Router::new()
        .route("/", get(handlers::welcome))
        .nest("/api", books)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
