//! Error types for HTTP handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use taskbox_core::error::CoreError;

/// Error type returned by every handler.
///
/// Converts into the wire envelope `{ "success": false, "message": ... }`
/// with the status code implied by the variant.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain error from `taskbox_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Storage error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Rejected input, carrying the validation message verbatim.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Handler result alias.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                format!("{entity} with id {id} not found"),
            ),
            AppError::Database(err) => database_response(err),
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
        };

        let body = json!({
            "success": false,
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a sqlx error to a status and message.
///
/// `RowNotFound` becomes a 404; anything else is logged and surfaced as a
/// 500 carrying the underlying message.
fn database_response(err: sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}
