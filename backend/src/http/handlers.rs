//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to one route. Handlers validate input, make a
//! single repository call and shape the response; they hold no state of
//! their own between requests.

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use tracing::{debug, info};

use super::dto::{Book, BookListQuery, CreateBookRequest, WELCOME_MESSAGE};
use super::error::AppError;
use super::state::AppState;
use crate::models::{BookFilter, BookId};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /
pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

// =============================================================================
// Books
// =============================================================================

/// GET /api/books
///
/// List all books, or only those whose genre equals `?genre=`.
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<BookListQuery>,
) -> HandlerResult<Vec<Book>> {
    let filter = BookFilter::from(query);
    let books = state.repository.find_all(&filter).await?;
    debug!(count = books.len(), genre = ?filter.genre, "listed books");

    Ok(Json(books))
}

/// GET /api/books/{book_id}
///
/// An id that cannot name a stored book is reported as not found.
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> HandlerResult<Book> {
    let id: BookId = book_id
        .parse()
        .map_err(|_| AppError::NotFound(format!("Book {} not found", book_id)))?;

    let book = state.repository.find_by_id(id).await?;
    Ok(Json(book))
}

/// POST /api/books
///
/// Rejects a missing or empty title with `400 Title is required` before the
/// repository is touched. That includes an empty body and a body sent
/// without a JSON content type.
pub async fn create_book(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Book>), AppError> {
    let request = CreateBookRequest::from_body(&headers, &body)?;
    let new_book = request.into_new_book()?;

    let book = state.repository.create(&new_book).await?;
    info!(id = %book.id, title = %book.title, "created book");

    Ok((StatusCode::CREATED, Json(book)))
}
