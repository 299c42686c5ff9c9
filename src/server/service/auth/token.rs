use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::server::{
    error::auth::AuthError,
    model::auth::{AuthSettings, SessionClaims, SESSION_LIFETIME},
};

/// Session token issuer and validator
///
/// Tokens are signed with HS256. Validation accepts any HMAC algorithm so tokens signed by
/// other services sharing the secret remain valid.
pub struct TokenService<'a> {
    settings: &'a AuthSettings,
}

impl<'a> TokenService<'a> {
    /// Creates a new instance of [`TokenService`]
    pub fn new(settings: &'a AuthSettings) -> Self {
        Self { settings }
    }

    /// Issues a session token for `user_id` expiring after [`SESSION_LIFETIME`]
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token
    /// - `Err(AuthError::TokenCreation)` - No signing secret configured or encoding failed
    pub fn issue(&self, user_id: i32) -> Result<String, AuthError> {
        if self.settings.jwt_secret.is_empty() {
            return Err(AuthError::TokenCreation(
                "JWT_AUTH_SECRET_KEY is not configured".to_string(),
            ));
        }

        let claims = SessionClaims {
            sub: user_id,
            exp: (Utc::now() + SESSION_LIFETIME).timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.settings.jwt_secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenCreation(e.to_string()))
    }

    /// Validates a session token and returns its claims
    ///
    /// # Returns
    /// - `Ok(SessionClaims)` - Signature valid and `exp` strictly in the future
    /// - `Err(AuthError::TokenExpired)` - Signature valid but the token has expired
    /// - `Err(AuthError::InvalidToken)` - Malformed token, bad signature or non-HMAC algorithm
    pub fn validate(&self, token: &str) -> Result<SessionClaims, AuthError> {
        if self.settings.jwt_secret.is_empty() {
            return Err(AuthError::InvalidToken(
                "JWT_AUTH_SECRET_KEY is not configured".to_string(),
            ));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.leeway = 0;

        let data = decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.settings.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken(e.to_string()),
        })?;

        if data.claims.exp <= Utc::now().timestamp() {
            return Err(AuthError::TokenExpired);
        }

        Ok(data.claims)
    }
}
