//! Library (borrow record) model and related types
//!
//! A record says that a client borrowed a book on a date and whether the
//! loan is still running. Reads embed the joined book and client.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use super::book::Book;
use super::client::Client;

/// Borrow record without its foreign keys
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct Library {
    #[serde(alias = "id")]
    #[serde_as(as = "DefaultOnNull")]
    pub id: i64,
    /// Free-form date, not validated as a calendar date
    #[serde(alias = "date")]
    #[serde_as(as = "DefaultOnNull")]
    pub date: String,
    #[serde(alias = "active")]
    #[serde_as(as = "DefaultOnNull")]
    pub active: bool,
}

/// Borrow record without its identity
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct LibraryRequest {
    #[serde(alias = "date")]
    #[serde_as(as = "DefaultOnNull")]
    pub date: String,
    #[serde(alias = "active")]
    #[serde_as(as = "DefaultOnNull")]
    pub active: bool,
}

/// Borrow record with its book and client, as returned by the list endpoint
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct LibraryJoin {
    #[serde(alias = "library")]
    #[serde_as(as = "DefaultOnNull")]
    pub library: Library,
    #[serde(alias = "book")]
    #[serde_as(as = "DefaultOnNull")]
    pub book: Book,
    #[serde(alias = "client")]
    #[serde_as(as = "DefaultOnNull")]
    pub client: Client,
}

/// Get-by-id response and create/update payload.
///
/// Only `Book.Id` and `Client.Id` are read from a payload; the other book
/// and client fields are ignored.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct LibraryRequestJoin {
    #[serde(alias = "library")]
    #[serde_as(as = "DefaultOnNull")]
    pub library: LibraryRequest,
    #[serde(alias = "book")]
    #[serde_as(as = "DefaultOnNull")]
    pub book: Book,
    #[serde(alias = "client")]
    #[serde_as(as = "DefaultOnNull")]
    pub client: Client,
}

impl Validate for LibraryRequestJoin {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.book.id == 0 {
            errors.add("book", ValidationError::new("book id is required"));
        }
        if self.client.id == 0 {
            errors.add("client", ValidationError::new("client id is required"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl From<LibraryJoin> for LibraryRequestJoin {
    fn from(join: LibraryJoin) -> Self {
        Self {
            library: LibraryRequest {
                date: join.library.date,
                active: join.library.active,
            },
            book: join.book,
            client: join.client,
        }
    }
}

/// Flat row of the library/book/client join
#[derive(Debug, Clone, FromRow)]
pub struct LibraryRow {
    pub id: i64,
    pub book_id: i64,
    pub book_name: String,
    pub book_author: String,
    pub client_id: i64,
    pub client_name: String,
    pub date: String,
    pub active: bool,
}

impl From<LibraryRow> for LibraryJoin {
    fn from(row: LibraryRow) -> Self {
        Self {
            library: Library {
                id: row.id,
                date: row.date,
                active: row.active,
            },
            book: Book {
                id: row.book_id,
                name: row.book_name,
                author: row.book_author,
            },
            client: Client {
                id: row.client_id,
                name: row.client_name,
            },
        }
    }
}
