//! Book endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    error::AppResult,
    models::{Book, BookRequest},
    AppState,
};

use super::{json_response, parse_delete_id, JsonBody, PathId};

/// List all books
#[utoipa::path(
    get,
    path = "/api/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<Book>),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Response> {
    let books = state.services.books.list().await?;
    json_response(StatusCode::OK, &books)
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookRequest),
        (status = 204, description = "No such book"),
        (status = 400, description = "Non-numeric id")
    )
)]
pub async fn get_book(State(state): State<AppState>, PathId(id): PathId) -> AppResult<Response> {
    match state.services.books.get_by_id(id).await? {
        Some(book) => json_response(StatusCode::OK, &book),
        None => {
            tracing::info!("Book {} not found", id);
            Ok(StatusCode::NO_CONTENT.into_response())
        }
    }
}

/// Create a book
#[utoipa::path(
    post,
    path = "/api/books",
    tag = "books",
    request_body = BookRequest,
    responses(
        (status = 201, description = "Book created", body = crate::models::CreatedId),
        (status = 400, description = "Name or author missing"),
        (status = 500, description = "Malformed body or store failure")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    JsonBody(data): JsonBody<BookRequest>,
) -> AppResult<Response> {
    let created = state.services.books.create(&data).await?;
    json_response(StatusCode::CREATED, &created)
}

/// Replace a book. The payload `Id` is ignored.
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    request_body = Book,
    responses(
        (status = 200, description = "Book updated, or no such book"),
        (status = 400, description = "Non-numeric id, missing name or author"),
        (status = 500, description = "Malformed body or store failure")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    PathId(id): PathId,
    JsonBody(data): JsonBody<Book>,
) -> AppResult<StatusCode> {
    state.services.books.update(id, &data).await?;
    Ok(StatusCode::OK)
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted, or no such book"),
        (status = 400, description = "Id below 1"),
        (status = 500, description = "Non-numeric id or store failure")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_delete_id(&raw_id)?;
    state.services.books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
