//! Shared application state and the session gate for protected routes.

use crate::auth::session::SessionStore;
use crate::config::Config;
use crate::error::AppError;
use crate::storage::document::DocumentStore;
use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: Arc<SessionStore>,
    pub documents: Arc<DocumentStore>,
}

/// Reject requests without a valid session.
///
/// Page loads (GET/HEAD) are redirected to `/login`; every other method gets a
/// 401 JSON error so the editor's fetch calls can tell what happened.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if state.sessions.is_authenticated(request.headers()) {
        return next.run(request).await;
    }

    if request.method() == Method::GET || request.method() == Method::HEAD {
        tracing::debug!(path = %request.uri().path(), "Redirecting unauthenticated request to login");
        crate::routes::found("/login", true)
    } else {
        AppError::Unauthorized("Not authenticated".to_string()).into_response()
    }
}
