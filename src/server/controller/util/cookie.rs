use tower_sessions::cookie::{Cookie, SameSite};

use crate::server::model::auth::{SESSION_COOKIE_NAME, SESSION_LIFETIME};

/// Cookie carrying a freshly issued session token.
///
/// Marked `Secure` in release builds only so that local development over plain HTTP works.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::seconds(SESSION_LIFETIME.num_seconds()))
        .secure(!cfg!(debug_assertions))
        .build()
}

/// Cookie instructing the client to drop its session token.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, ""))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::ZERO)
        .secure(!cfg!(debug_assertions))
        .build()
}
