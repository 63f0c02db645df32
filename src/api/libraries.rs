//! Borrow record endpoints
//!
//! Reads return the record together with its book and client. Writes take
//! the same nested shape but only look at `Book.Id` and `Client.Id`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    error::AppResult,
    models::LibraryRequestJoin,
    AppState,
};

use super::{json_response, parse_delete_id, JsonBody, PathId};

/// List all borrow records
#[utoipa::path(
    get,
    path = "/api/libraries",
    tag = "libraries",
    responses(
        (status = 200, description = "All borrow records with book and client", body = Vec<crate::models::LibraryJoin>),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_libraries(State(state): State<AppState>) -> AppResult<Response> {
    let records = state.services.libraries.list().await?;
    json_response(StatusCode::OK, &records)
}

/// Get borrow record by ID
#[utoipa::path(
    get,
    path = "/api/libraries/{id}",
    tag = "libraries",
    params(("id" = i64, Path, description = "Borrow record ID")),
    responses(
        (status = 200, description = "Borrow record with book and client", body = LibraryRequestJoin),
        (status = 204, description = "No such record"),
        (status = 400, description = "Non-numeric id")
    )
)]
pub async fn get_library(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Response> {
    match state.services.libraries.get_by_id(id).await? {
        Some(record) => json_response(StatusCode::OK, &record),
        None => {
            tracing::info!("Borrow record {} not found", id);
            Ok(StatusCode::NO_CONTENT.into_response())
        }
    }
}

/// Record a borrow
#[utoipa::path(
    post,
    path = "/api/libraries",
    tag = "libraries",
    request_body = LibraryRequestJoin,
    responses(
        (status = 201, description = "Borrow recorded", body = crate::models::CreatedId),
        (status = 400, description = "Book or client id missing"),
        (status = 500, description = "Malformed body, unknown book/client or store failure")
    )
)]
pub async fn create_library(
    State(state): State<AppState>,
    JsonBody(data): JsonBody<LibraryRequestJoin>,
) -> AppResult<Response> {
    let created = state.services.libraries.create(&data).await?;
    json_response(StatusCode::CREATED, &created)
}

#[utoipa::path(
    put,
    path = "/api/libraries/{id}",
    tag = "libraries",
    params(("id" = i64, Path, description = "Borrow record ID")),
    request_body = LibraryRequestJoin,
    responses(
        (status = 200, description = "Record updated, or no such record"),
        (status = 400, description = "Non-numeric id, book id, client id or date missing"),
        (status = 500, description = "Malformed body or store failure")
    )
)]
pub async fn update_library(
    State(state): State<AppState>,
    PathId(id): PathId,
    JsonBody(data): JsonBody<LibraryRequestJoin>,
) -> AppResult<StatusCode> {
    state.services.libraries.update(id, &data).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/api/libraries/{id}",
    tag = "libraries",
    params(("id" = i64, Path, description = "Borrow record ID")),
    responses(
        (status = 204, description = "Record deleted, or no such record"),
        (status = 400, description = "Id below 1"),
        (status = 500, description = "Non-numeric id or store failure")
    )
)]
pub async fn delete_library(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_delete_id(&raw_id)?;
    state.services.libraries.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
