use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::bad_request};

#[derive(Error, Debug)]
pub enum EventError {
    #[error("Event ID {0:?} not found")]
    NotFound(i32),
    #[error("Invalid event query: {0}")]
    InvalidQuery(String),
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(event_id) => {
                tracing::debug!(event_id = %event_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Event not found.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidQuery(ref reason) => {
                tracing::debug!("{}", self);

                bad_request(reason)
            }
        }
    }
}
