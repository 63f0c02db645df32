//! Error types for the library API
//!
//! Every error ends the current request. The client only ever sees the
//! status code; the error text goes to the log sink.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::ValidationErrors;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed path identifier or other client-side mistake
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Required field missing or empty in a well-formed payload
    #[error("Validation error: {0}")]
    Validation(String),

    /// Request body could not be read or is not valid JSON
    #[error("Decode error: {0}")]
    Decode(String),

    /// Response body could not be serialized
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            // Malformed JSON is reported as a server error to stay
            // wire-compatible with existing clients.
            AppError::Decode(_)
            | AppError::Encode(_)
            | AppError::Database(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self);
        } else {
            tracing::warn!(status = status.as_u16(), "{}", self);
        }

        status.into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
