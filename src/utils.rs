use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::names;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Session cookie carrying the quiz session id. No `Max-Age`, so it lives as
/// long as the browser session.
pub fn session_cookie(session_id: String, secure: bool) -> Cookie<'static> {
    Cookie::build((names::QUIZ_SESSION_COOKIE_NAME, session_id))
        .http_only(true)
        .secure(secure)
        .path("/")
        .same_site(SameSite::Lax)
        .build()
}

pub fn new_session_id() -> String {
    ulid::Ulid::new().to_string()
}
