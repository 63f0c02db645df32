//! API handlers for the library REST endpoints

pub mod books;
pub mod clients;
pub mod health;
pub mod libraries;
pub mod openapi;


use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        request::Parts,
        HeaderName, HeaderValue, Method, StatusCode,
    },
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// Numeric `{id}` path segment. A non-numeric id is a bad request.
pub struct PathId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        raw.parse::<i64>()
            .map(PathId)
            .map_err(|e| AppError::BadRequest(format!("invalid id {:?}: {}", raw, e)))
    }
}

/// JSON request body.
///
/// Unlike `axum::Json` this ignores the content type, and an unreadable or
/// malformed body is reported as an internal error. Object keys match
/// field names case-insensitively (the last of two spellings wins) and a
/// bare `null` body decodes to the empty payload.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Decode(e.to_string()))?;

        let value: Value =
            serde_json::from_slice(&body).map_err(|e| AppError::Decode(e.to_string()))?;
        if value.is_null() {
            return Ok(JsonBody(T::default()));
        }

        serde_json::from_value(fold_keys(value))
            .map(JsonBody)
            .map_err(|e| AppError::Decode(e.to_string()))
    }
}

/// Lowercase every object key, recursively
fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.to_lowercase(), fold_keys(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(fold_keys).collect()),
        other => other,
    }
}

/// Parse the id of a delete request: garbage is a 500, ids below 1 are
/// rejected later by the service
pub(crate) fn parse_delete_id(raw: &str) -> AppResult<i64> {
    raw.parse::<i64>()
        .map_err(|e| AppError::Internal(format!("invalid id {:?}: {}", raw, e)))
}

/// Serialize `value` as the JSON body of a response with `status`
pub(crate) fn json_response<T: Serialize>(status: StatusCode, value: &T) -> AppResult<Response> {
    let body = serde_json::to_vec(value)?;
    Ok((
        status,
        [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body,
    )
        .into_response())
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // Any origin, with credentials: the request origin is echoed back
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            ACCEPT,
            CONTENT_TYPE,
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_credentials(true);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        // Clients
        .route("/clients", get(clients::list_clients).post(clients::create_client))
        .route(
            "/clients/:id",
            get(clients::get_client)
                .put(clients::update_client)
                .delete(clients::delete_client),
        )
        // Borrow records
        .route(
            "/libraries",
            get(libraries::list_libraries).post(libraries::create_library),
        )
        .route(
            "/libraries/:id",
            get(libraries::get_library)
                .put(libraries::update_library)
                .delete(libraries::delete_library),
        )
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .merge(openapi::create_openapi_router())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO)),
        )
        .layer(cors)
}
