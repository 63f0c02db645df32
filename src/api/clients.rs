//! Client endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    error::AppResult,
    models::{Client, ClientRequest},
    AppState,
};

use super::{json_response, parse_delete_id, JsonBody, PathId};

/// List all clients
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = "clients",
    responses(
        (status = 200, description = "All clients", body = Vec<Client>),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_clients(State(state): State<AppState>) -> AppResult<Response> {
    let clients = state.services.clients.list().await?;
    json_response(StatusCode::OK, &clients)
}

/// Get client by ID
#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    tag = "clients",
    params(("id" = i64, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client details", body = ClientRequest),
        (status = 204, description = "No such client"),
        (status = 400, description = "Non-numeric id")
    )
)]
pub async fn get_client(State(state): State<AppState>, PathId(id): PathId) -> AppResult<Response> {
    match state.services.clients.get_by_id(id).await? {
        Some(client) => json_response(StatusCode::OK, &client),
        None => {
            tracing::info!("Client {} not found", id);
            Ok(StatusCode::NO_CONTENT.into_response())
        }
    }
}

/// Create a client
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = "clients",
    request_body = ClientRequest,
    responses(
        (status = 201, description = "Client created", body = crate::models::CreatedId),
        (status = 400, description = "Name missing"),
        (status = 500, description = "Malformed body or store failure")
    )
)]
pub async fn create_client(
    State(state): State<AppState>,
    JsonBody(data): JsonBody<ClientRequest>,
) -> AppResult<Response> {
    let created = state.services.clients.create(&data).await?;
    json_response(StatusCode::CREATED, &created)
}

/// Replace a client. The payload `Id` is ignored.
#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    tag = "clients",
    params(("id" = i64, Path, description = "Client ID")),
    request_body = Client,
    responses(
        (status = 200, description = "Client updated, or no such client"),
        (status = 400, description = "Non-numeric id or missing name"),
        (status = 500, description = "Malformed body or store failure")
    )
)]
pub async fn update_client(
    State(state): State<AppState>,
    PathId(id): PathId,
    JsonBody(data): JsonBody<Client>,
) -> AppResult<StatusCode> {
    state.services.clients.update(id, &data).await?;
    Ok(StatusCode::OK)
}

/// Delete a client
#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    tag = "clients",
    params(("id" = i64, Path, description = "Client ID")),
    responses(
        (status = 204, description = "Client deleted, or no such client"),
        (status = 400, description = "Id below 1"),
        (status = 500, description = "Non-numeric id or store failure")
    )
)]
pub async fn delete_client(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_delete_id(&raw_id)?;
    state.services.clients.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
