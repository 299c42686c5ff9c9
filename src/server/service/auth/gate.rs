use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;
use tower_sessions::cookie::Cookie;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::auth::{AuthSettings, RequestAuth, SESSION_COOKIE_NAME},
    service::auth::token::TokenService,
};

/// Decides how a request is authenticated
///
/// An allow-listed bearer token lets the request through as [`RequestAuth::Anonymous`]
/// without looking at cookies. Otherwise the session cookie must carry a valid token for
/// a user that still exists.
pub struct GateService<'a> {
    db: &'a DatabaseConnection,
    settings: &'a AuthSettings,
}

impl<'a> GateService<'a> {
    /// Creates a new instance of [`GateService`]
    pub fn new(db: &'a DatabaseConnection, settings: &'a AuthSettings) -> Self {
        Self { db, settings }
    }

    /// # Returns
    /// - `Ok(RequestAuth::Anonymous)` - Allow-listed bearer token presented
    /// - `Ok(RequestAuth::Authenticated)` - Valid session cookie for an existing user
    /// - `Err(Error::AuthError)` - Missing, invalid or expired token, or unknown user
    /// - `Err(Error::DbErr)` - Failed to look up the user
    pub async fn authorize(&self, headers: &HeaderMap) -> Result<RequestAuth, Error> {
        if bearer_token(headers).is_some_and(|token| self.settings.is_allowed_token(token)) {
            return Ok(RequestAuth::Anonymous);
        }

        let token = session_token(headers).ok_or(AuthError::MissingToken)?;
        let claims = TokenService::new(self.settings).validate(&token)?;

        let user = UserRepository::new(self.db)
            .get_by_id(claims.sub)
            .await?
            .ok_or(AuthError::UserNotInDatabase(claims.sub))?;

        Ok(RequestAuth::Authenticated(user.into()))
    }
}

/// Value of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Non-empty value of the session cookie across every `Cookie` header.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| Cookie::split_parse(value.to_string()))
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}
