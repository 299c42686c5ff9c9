//! Test fixture modules for database rows, tokens and HTTP mocks.
//!
//! - `auth` - signed session tokens
//! - `event` - roster event rows
//! - `factory` - plain value helpers
//! - `holiday` - mock public holiday feed endpoints
//! - `user` - roster user rows

pub mod auth;
pub mod event;
pub mod factory;
pub mod holiday;
pub mod user;
