//! Error types for the HTTP surface.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ladder_adapter_pg::DbError;
use ladder_core::ProjectionError;
use serde_json::json;
use thiserror::Error;

/// Errors that stop the server itself.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to start the server.
    #[error("failed to start server: {0}")]
    StartupFailed(String),

    /// The server stopped with an IO error.
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reported by the introspection and projection endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be read as the expected JSON.
    #[error("invalid request body: {0}")]
    Body(#[from] JsonRejection),

    /// The request was refused before reaching the database.
    #[error(transparent)]
    Rejected(#[from] ProjectionError),

    /// The database operation failed.
    #[error(transparent)]
    Database(#[from] DbError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Body(_)
            | ApiError::Rejected(_)
            | ApiError::Database(DbError::Rejected(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Database(e) if e.is_connection() => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
