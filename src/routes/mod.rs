//! HTTP routes.

pub mod auth;
pub mod document;

use crate::auth::{require_session, AppState};
use crate::middleware::preflight;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, get_service, post},
    Router,
};
use tower_http::services::ServeDir;

/// 302 redirect to `location`, optionally marked `Cache-Control: no-store`.
pub fn found(location: &str, no_store: bool) -> Response {
    let mut response = StatusCode::FOUND.into_response();
    let headers = response.headers_mut();
    match HeaderValue::from_str(location) {
        Ok(value) => {
            headers.insert(header::LOCATION, value);
        }
        Err(_) => {
            headers.insert(header::LOCATION, HeaderValue::from_static("/"));
        }
    }
    if no_store {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    }
    response
}

/// Build the complete application.
///
/// `/login` and `/logout` are public. Everything else, including the static
/// file fallback, sits behind the session gate. OPTIONS is answered before
/// routing so preflights never need a session.
pub fn app(state: AppState) -> Router {
    let public = Router::new()
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", post(auth::logout));

    let static_files =
        get_service(ServeDir::new(&state.config.static_dir)).fallback(document::not_found);

    let protected = Router::new()
        .route("/", get(document::index).fallback(document::not_found))
        .route(
            &state.config.data_path(),
            get(document::read_document).fallback(document::not_found),
        )
        .route(
            "/save",
            post(document::save_document).fallback(document::not_found),
        )
        .fallback_service(static_files)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    public
        .merge(protected)
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .layer(axum::middleware::from_fn(preflight))
        .with_state(state)
}
