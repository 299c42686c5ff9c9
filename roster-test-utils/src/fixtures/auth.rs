//! Signed session token factories.
//!
//! Tokens carry the same `{sub, exp}` claims the server issues so tests can present
//! expired, foreign-key or differently signed tokens without going through login.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::json;

use crate::{constant::TEST_JWT_SECRET, error::TestError};

/// Session token for `user_id` valid for 90 days, signed with the test secret.
pub fn session_token(user_id: i32) -> Result<String, TestError> {
    session_token_with(user_id, Duration::days(90), TEST_JWT_SECRET, Algorithm::HS256)
}

/// Session token for `user_id` that expired `ago` in the past.
pub fn expired_session_token(user_id: i32, ago: Duration) -> Result<String, TestError> {
    session_token_with(user_id, -ago, TEST_JWT_SECRET, Algorithm::HS256)
}

/// Session token with full control over expiry offset, secret and HMAC algorithm.
pub fn session_token_with(
    user_id: i32,
    expires_in: Duration,
    secret: &str,
    algorithm: Algorithm,
) -> Result<String, TestError> {
    let claims = json!({
        "sub": user_id,
        "exp": (Utc::now() + expires_in).timestamp(),
    });

    Ok(encode(
        &Header::new(algorithm),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}
