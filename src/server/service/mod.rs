//! Service layer for business logic.
//!
//! Services coordinate repositories, the user directory and the holiday feed. Each is a
//! short-lived struct borrowing the database connection for the duration of a request or
//! job run.

pub mod auth;
pub mod event;
pub mod holiday;
pub mod user;
