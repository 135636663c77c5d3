//! Authentication layer: signed session tokens, cookie sessions and the route gate.

pub mod middleware;
pub mod session;
pub mod token;

pub use middleware::{require_session, AppState};
pub use session::{clear_session_cookie, SessionStore, SESSION_COOKIE};
pub use token::TokenCodec;
