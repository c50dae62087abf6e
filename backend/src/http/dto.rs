//! Data Transfer Objects for the HTTP API.

use axum::{
    body::Bytes,
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use serde::{Deserialize, Serialize};

use super::error::AppError;
use crate::models::{BookFilter, NewBook};

pub use crate::models::Book;

/// Plain-text body returned when a book is posted without a title.
pub const TITLE_REQUIRED: &str = "Title is required";

/// Static text served on `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to my API!";

/// Request body for creating a new book.
///
/// Every field is optional at the wire level so that a missing title is
/// reported with [`TITLE_REQUIRED`] rather than a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBookRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
}

impl CreateBookRequest {
    /// Read a create request from a raw POST body.
    ///
    /// A body that is blank or not declared as JSON reads as an empty request,
    /// so it fails title validation instead of body parsing. Only a JSON body
    /// that does not parse is a [`AppError::BadRequest`].
    pub fn from_body(headers: &HeaderMap, body: &Bytes) -> Result<Self, AppError> {
        if !declares_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        Json::<Self>::from_bytes(body)
            .map(|Json(request)| request)
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
    }

    /// Validate the request and turn it into an insert shape.
    ///
    /// `read` always starts out `false`.
    pub fn into_new_book(self) -> Result<NewBook, AppError> {
        let title = match self.title {
            Some(title) if !title.is_empty() => title,
            _ => return Err(AppError::Validation(TITLE_REQUIRED.to_string())),
        };

        Ok(NewBook {
            title,
            author: self.author,
            genre: self.genre,
            read: false,
        })
    }
}

fn declares_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// Query parameters for `GET /api/books`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookListQuery {
    #[serde(default)]
    pub genre: Option<String>,
}

impl From<BookListQuery> for BookFilter {
    fn from(query: BookListQuery) -> Self {
        BookFilter::from_query(query.genre)
    }
}
