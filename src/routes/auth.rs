//! Login and logout endpoints.

use crate::auth::{clear_session_cookie, AppState};
use crate::routes::found;
use axum::{
    body::Bytes,
    extract::{ConnectInfo, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use std::net::SocketAddr;
use zeroize::Zeroizing;

const LOGIN_PAGE: &str = include_str!("login.html");

pub const LOGIN_FAILED_MESSAGE: &str = "Incorrect password. Please try again.";

#[derive(Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    password: String,
}

impl LoginForm {
    /// Parse a urlencoded body regardless of the declared content type.
    /// An unreadable body counts as an empty password.
    pub fn parse(body: &[u8]) -> Self {
        serde_urlencoded::from_bytes(body).unwrap_or_default()
    }
}

/// Render the login page, with an optional error banner.
pub fn login_page(error: Option<&str>) -> Response {
    let banner = error
        .map(|e| format!(r#"<div class="error">{}</div>"#, escape_html(e)))
        .unwrap_or_default();
    let page = LOGIN_PAGE.replace("{error}", &banner);

    (
        StatusCode::OK,
        [(header::CACHE_CONTROL, "no-store")],
        Html(page),
    )
        .into_response()
}

/// GET /login
pub async fn login_form() -> Response {
    login_page(None)
}

/// POST /login: check the password and start a session
pub async fn login(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let password = Zeroizing::new(LoginForm::parse(&body).password);
    if !state.sessions.check_password(&password) {
        tracing::warn!(action = "login_failed", client = %addr.ip(), "Failed login attempt");
        return login_page(Some(LOGIN_FAILED_MESSAGE));
    }

    let host = headers.get(header::HOST).and_then(|h| h.to_str().ok());
    let cookie = state.sessions.new_session_cookie(host);

    let mut response = found(&state.config.editor_path(), true);
    match HeaderValue::from_str(&cookie) {
        Ok(value) => {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
        Err(e) => {
            tracing::error!(error = %e, "Session cookie is not a valid header value");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response();
        }
    }

    tracing::info!(action = "login", client = %addr.ip(), "Login successful");
    response
}

/// POST /logout: drop the session cookie
pub async fn logout() -> Response {
    let mut response = found("/login", true);
    if let Ok(value) = HeaderValue::from_str(&clear_session_cookie()) {
        response.headers_mut().insert(header::SET_COOKIE, value);
    }
    tracing::info!(action = "logout", "Session cleared");
    response
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
