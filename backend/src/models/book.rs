//! Book record, insert shape and list filter.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

crate::define_id_type!(Uuid, BookId);

impl BookId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        BookId(Uuid::new_v4())
    }
}

impl FromStr for BookId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(BookId)
    }
}

/// A stored catalog entry.
///
/// The identifier is serialized as `_id`, matching what document-store
/// clients expect from this API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "_id")]
    pub id: BookId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default)]
    pub read: bool,
}

/// Fields for a book that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub read: bool,
}

impl NewBook {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Attach a store-assigned identifier, producing the stored record.
    pub fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            genre: self.genre,
            read: self.read,
        }
    }
}

/// Restriction applied when listing books.
///
/// `genre` is matched exactly (case-sensitive).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub genre: Option<String>,
}

impl BookFilter {
    pub fn by_genre(genre: impl Into<String>) -> Self {
        Self {
            genre: Some(genre.into()),
        }
    }

    /// Build a filter from a raw query value. Empty strings mean "no filter".
    pub fn from_query(genre: Option<String>) -> Self {
        Self {
            genre: genre.filter(|g| !g.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.genre.is_none()
    }

    pub fn matches(&self, book: &Book) -> bool {
        match &self.genre {
            Some(genre) => book.genre.as_deref() == Some(genre.as_str()),
            None => true,
        }
    }
}
