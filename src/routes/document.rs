//! Ads Document endpoints.

use crate::auth::AppState;
use crate::error::AppError;
use crate::routes::found;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

/// GET /: send the browser to the editor
pub async fn index(State(state): State<AppState>) -> Response {
    found(&state.config.editor_path(), false)
}

/// GET /{data file}: the current document, never cached by the browser
pub async fn read_document(State(state): State<AppState>) -> Result<Response, AppError> {
    let text = state.documents.load().await?;
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        text,
    )
        .into_response())
}

/// POST /save: replace the document with the request body
///
/// The body is parsed here rather than with the `Json` extractor so that
/// malformed input reports the parser's message like any other save failure.
pub async fn save_document(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let document: serde_json::Value = serde_json::from_slice(&body)?;
    let backup = state.documents.save(&document).await?;

    tracing::info!(
        action = "save",
        bytes = body.len(),
        backup = ?backup.as_ref().and_then(|b| b.file_name()),
        "Saved document"
    );

    Ok(Json(serde_json::json!({ "ok": true })))
}

/// Any non-GET request to an unknown path.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
