//! Server application models and type definitions.
//!
//! Application state shared by handlers, session token claims and the typed request
//! authentication result, the public holiday feed document, and database model type
//! aliases.

pub mod app;
pub mod auth;
pub mod db;
pub mod holiday;
