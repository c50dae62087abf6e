use diesel::prelude::*;
use uuid::Uuid;

use super::schema::books;
use crate::models::{Book, BookId, NewBook};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = books)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BookRow {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub read: bool,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = books)]
pub struct NewBookRow {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub read: bool,
}

impl NewBookRow {
    pub fn from_new_book(id: BookId, book: &NewBook) -> Self {
        Self {
            id: id.value(),
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            read: book.read,
        }
    }
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book {
            id: BookId::new(row.id),
            title: row.title,
            author: row.author,
            genre: row.genre,
            read: row.read,
        }
    }
}
