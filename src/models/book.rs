//! Book model and related types

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Book as stored, also the update payload (its `Id` is ignored in favour
/// of the path id)
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, Validate, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct Book {
    #[serde(alias = "id")]
    #[serde_as(as = "DefaultOnNull")]
    pub id: i64,
    #[serde(alias = "name")]
    #[serde_as(as = "DefaultOnNull")]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(alias = "author")]
    #[serde_as(as = "DefaultOnNull")]
    #[validate(length(min = 1, message = "author is required"))]
    pub author: String,
}

/// Book without its identity: create payload and get-by-id response
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct BookRequest {
    #[serde(alias = "name")]
    #[serde_as(as = "DefaultOnNull")]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(alias = "author")]
    #[serde_as(as = "DefaultOnNull")]
    #[validate(length(min = 1, message = "author is required"))]
    pub author: String,
}

impl From<Book> for BookRequest {
    fn from(book: Book) -> Self {
        Self {
            name: book.name,
            author: book.author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_accepts_lowercase_keys() {
        let request: BookRequest =
            serde_json::from_value(json!({"name": "Dune", "author": "Herbert"})).unwrap();
        assert_eq!(request.name, "Dune");
        assert_eq!(request.author, "Herbert");

        let request: BookRequest =
            serde_json::from_value(json!({"Name": "Dune", "Author": "Herbert"})).unwrap();
        assert_eq!(request.author, "Herbert");
    }

    #[test]
    fn test_missing_fields_decode_empty() {
        let request: BookRequest = serde_json::from_value(json!({"name": "Dune"})).unwrap();
        assert_eq!(request.author, "");
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_null_fields_decode_empty() {
        let request: BookRequest =
            serde_json::from_value(json!({"name": "Dune", "author": null})).unwrap();
        assert_eq!(request.author, "");
        assert!(request.validate().is_err());

        let book: Book = serde_json::from_value(json!({"Id": null, "Name": "Dune"})).unwrap();
        assert_eq!(book.id, 0);
    }

    #[test]
    fn test_encode_uses_pascal_case() {
        let book = Book {
            id: 3,
            name: "Dune".into(),
            author: "Herbert".into(),
        };
        assert_eq!(
            serde_json::to_value(&book).unwrap(),
            json!({"Id": 3, "Name": "Dune", "Author": "Herbert"})
        );
        assert_eq!(
            serde_json::to_value(BookRequest::from(book)).unwrap(),
            json!({"Name": "Dune", "Author": "Herbert"})
        );
    }

    #[test]
    fn test_update_payload_validation() {
        let book: Book =
            serde_json::from_value(json!({"Id": 99, "Name": "Dune", "Author": ""})).unwrap();
        assert!(book.validate().is_err());

        let book: Book =
            serde_json::from_value(json!({"Name": "Dune", "Author": "Herbert"})).unwrap();
        assert!(book.validate().is_ok());
    }
}
