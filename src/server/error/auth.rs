use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{bad_request, InternalServerError},
};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Unable to connect to the directory: {0}")]
    DirectoryUnavailable(String),
    #[error("Directory rejected the credentials for user {0:?}")]
    InvalidCredentials(String),
    #[error("Failed to create session token: {0}")]
    TokenCreation(String),
    #[error("Request carried no session token")]
    MissingToken,
    #[error("Session token failed validation: {0}")]
    InvalidToken(String),
    #[error("Session token has expired")]
    TokenExpired,
    #[error("User ID {0:?} from session token not found in database")]
    UserNotInDatabase(i32),
    #[error("Request is not bound to a user")]
    UserNotInSession,
}

impl AuthError {
    fn unauthorized(message: &str) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::DirectoryUnavailable(_) => {
                tracing::warn!("{}", self);

                bad_request("Unable to connect to LDAP backend")
            }
            Self::InvalidCredentials(_) => {
                tracing::debug!("{}", self);

                Self::unauthorized("Invalid username and password")
            }
            Self::TokenCreation(_) => InternalServerError(self).into_response(),
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                Self::unauthorized("Unauthorized")
            }
            err => {
                tracing::debug!("{}", err);

                Self::unauthorized("Unauthorized")
            }
        }
    }
}
