//! Error types and Axum response conversions.

use crate::storage::document::StorageError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application error types.
///
/// Failures of the document routes carry their message to the client; the
/// editor shows it to the user when a load or save fails.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("{0}")]
    InvalidDocument(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Not found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Storage(err) => {
                tracing::error!(error = %err, "Document storage failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::InvalidDocument(msg) => {
                tracing::warn!(error = %msg, "Rejected document");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound => StatusCode::NOT_FOUND,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidDocument(err.to_string())
    }
}
