//! Data models for the library API

pub mod book;
pub mod client;
pub mod library;

use serde::Serialize;
use utoipa::ToSchema;

pub use book::{Book, BookRequest};
pub use client::{Client, ClientRequest};
pub use library::{Library, LibraryJoin, LibraryRequest, LibraryRequestJoin, LibraryRow};

/// Identity generated by a create operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreatedId {
    pub id: i64,
}
