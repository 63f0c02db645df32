//! OpenAPI documentation

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::api::{books, clients, health, libraries};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library API",
        version = "0.1.0",
        description = "Books, clients and borrow records"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Clients
        clients::list_clients,
        clients::get_client,
        clients::create_client,
        clients::update_client,
        clients::delete_client,
        // Borrow records
        libraries::list_libraries,
        libraries::get_library,
        libraries::create_library,
        libraries::update_library,
        libraries::delete_library,
    ),
    components(
        schemas(
            crate::models::Book,
            crate::models::BookRequest,
            crate::models::Client,
            crate::models::ClientRequest,
            crate::models::Library,
            crate::models::LibraryRequest,
            crate::models::LibraryJoin,
            crate::models::LibraryRequestJoin,
            crate::models::CreatedId,
            health::HealthResponse,
            health::ReadinessResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog"),
        (name = "clients", description = "Borrowers"),
        (name = "libraries", description = "Borrow records")
    )
)]
pub struct ApiDoc;

/// Router serving the generated OpenAPI document
pub fn create_openapi_router() -> Router {
    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}
