use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::{
    model::user::UserDto,
    server::error::{auth::AuthError, Error},
};

/// Name of the cookie carrying the signed session token.
pub const SESSION_COOKIE_NAME: &str = "Authorization";

/// Lifetime of a session token and of the cookie carrying it.
pub const SESSION_LIFETIME: Duration = Duration::days(90);

/// Claims signed into every session token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// ID of the user the token was issued to
    pub sub: i32,
    /// Expiry as a unix timestamp in seconds
    pub exp: i64,
}

/// Process-wide authentication settings, loaded once at startup.
#[derive(Clone, Debug, Default)]
pub struct AuthSettings {
    /// Shared HMAC secret used to sign and verify session tokens
    pub jwt_secret: String,
    /// Static bearer tokens which bypass session validation
    pub allowed_tokens: Vec<String>,
}

impl AuthSettings {
    /// Returns true when `token` exactly matches an allow-listed bearer token.
    pub fn is_allowed_token(&self, token: &str) -> bool {
        !token.is_empty() && self.allowed_tokens.iter().any(|allowed| allowed == token)
    }
}

/// Outcome of the request gate for a request that was let through.
///
/// Rejected requests never reach a handler, so there is no variant for them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestAuth {
    /// Session cookie resolved to a user
    Authenticated(UserDto),
    /// Trusted caller presenting an allow-listed bearer token, not bound to any user
    Anonymous,
}

impl RequestAuth {
    /// The user behind the request, if any.
    pub fn user(&self) -> Option<&UserDto> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Anonymous => None,
        }
    }

    /// Requires the request to be bound to a user.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Request authenticated with a session cookie
    /// - `Err(Error::AuthError(AuthError::UserNotInSession))` - Trusted bearer caller
    pub fn require_user(self) -> Result<UserDto, Error> {
        match self {
            Self::Authenticated(user) => Ok(user),
            Self::Anonymous => Err(AuthError::UserNotInSession.into()),
        }
    }
}
