//! Cookie-based sessions on top of [`TokenCodec`].
//!
//! The session lives entirely in the `session` cookie; the server only holds
//! the signing secret and the configured password.

use super::token::{unix_now, TokenCodec};
use axum::http::{header, HeaderMap};
use cookie::{time::Duration, Cookie, SameSite};
use std::net::IpAddr;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session";

pub struct SessionStore {
    password: Option<Zeroizing<String>>,
    codec: TokenCodec,
}

impl SessionStore {
    /// `password: None` disables authentication: every request is treated as signed in.
    pub fn new(password: Option<Zeroizing<String>>, codec: TokenCodec) -> Self {
        Self { password, codec }
    }

    pub fn auth_enabled(&self) -> bool {
        self.password.is_some()
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Whether the request carries a valid session (always true with auth disabled).
    pub fn is_authenticated(&self, headers: &HeaderMap) -> bool {
        if !self.auth_enabled() {
            return true;
        }
        match session_token(headers) {
            Some(token) => self.codec.verify(&token),
            None => false,
        }
    }

    /// Constant-time comparison of a submitted password with the configured one.
    ///
    /// With no password configured the expected value is the empty string.
    pub fn check_password(&self, candidate: &str) -> bool {
        let expected = self.password.as_ref().map(|p| p.as_str()).unwrap_or("");
        expected.as_bytes().ct_eq(candidate.as_bytes()).into()
    }

    /// `Set-Cookie` value for a session issued at `now`.
    ///
    /// `Secure` is set unless `host` is a loopback host, so local development over
    /// plain HTTP keeps working.
    pub fn session_cookie(&self, host: Option<&str>, now: u64) -> String {
        let max_age = i64::try_from(self.codec.max_age_secs()).unwrap_or(i64::MAX);
        Cookie::build((SESSION_COOKIE, self.codec.issue(now)))
            .max_age(Duration::seconds(max_age))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(!is_loopback_host(host.unwrap_or("localhost")))
            .build()
            .to_string()
    }

    /// Session cookie issued at the current time.
    pub fn new_session_cookie(&self, host: Option<&str>) -> String {
        self.session_cookie(host, unix_now())
    }
}

/// `Set-Cookie` value that removes the session cookie.
pub fn clear_session_cookie() -> String {
    Cookie::build((SESSION_COOKIE, ""))
        .max_age(Duration::ZERO)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
        .to_string()
}

/// Extract the `session` cookie value from the request headers.
///
/// Unparseable cookie pairs are skipped rather than failing the whole header.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| Cookie::split_parse(value.to_string()))
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
}

/// Whether a `Host` header value names the local machine.
pub fn is_loopback_host(host: &str) -> bool {
    let host = host.trim();
    let name = if let Some(rest) = host.strip_prefix('[') {
        // [::1]:8080
        rest.split(']').next().unwrap_or(rest)
    } else if host.matches(':').count() == 1 {
        host.split(':').next().unwrap_or(host)
    } else {
        host
    };

    if name.eq_ignore_ascii_case("localhost") {
        return true;
    }
    name.parse::<IpAddr>().map(|ip| ip.is_loopback()).unwrap_or(false)
}
