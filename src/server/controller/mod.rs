//! HTTP controller endpoints for the roster web API.
//!
//! Axum handlers for login, session validation, events and users. Handlers extract the
//! request authentication, call into services, and shape the HTTP response. Every handler
//! carries a utoipa path annotation for the OpenAPI document.

pub mod auth;
pub mod event;
pub mod user;
pub mod util;
