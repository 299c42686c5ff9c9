//! Error types for the roster server.
//!
//! Every domain gets its own `thiserror` enum which knows how to turn itself into an HTTP
//! response. [`Error`] aggregates them together with library errors so handlers and
//! services can use `?` throughout.

pub mod auth;
pub mod config;
pub mod event;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, event::EventError, user::UserError},
};

/// Main error type for the roster server.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (directory bind, session token validation)
/// - Event and user errors (unknown identifiers, invalid queries)
/// - Malformed request bodies
/// - External library errors (database, holiday feed, scheduler, listener)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (directory, token issuance, request gate).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Event lookup or query error.
    #[error(transparent)]
    EventError(#[from] EventError),
    /// User lookup error.
    #[error(transparent)]
    UserError(#[from] UserError),
    /// Request body could not be read or is missing required fields.
    #[error("Failed to read body: {0}")]
    InvalidBody(String),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Outbound HTTP error while fetching the holiday feed.
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
    /// IO error (binding the listener, serving).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Malformed bodies, invalid query parameters, unreachable directory
/// - 401 Unauthorized - Invalid credentials or session tokens
/// - 404 Not Found - Unknown event or user
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::EventError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            Self::InvalidBody(reason) => {
                tracing::debug!(reason = %reason, "Rejected request body");

                bad_request("Failed to read body")
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a 400 response with the provided message.
pub(crate) fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorDto {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged, the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::*;

    #[test]
    fn maps_invalid_body_to_bad_request() {
        let resp = Error::InvalidBody("missing field `type`".to_string()).into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn maps_database_errors_to_internal_server_error() {
        let resp = Error::DbErr(sea_orm::DbErr::Custom("boom".to_string())).into_response();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn maps_parse_errors_to_internal_server_error() {
        let resp = Error::ParseError("bad".to_string()).into_response();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
