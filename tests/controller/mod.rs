//! Tests for HTTP controller endpoints.
//!
//! Requests are sent through the full router so the request gate, extractor rejections
//! and error responses are exercised together with the handlers.

mod auth;
mod event;
mod user;
