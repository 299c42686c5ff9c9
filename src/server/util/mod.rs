//! Utility functions and helpers for server operations.
//!
//! Date parsing shared by query strings and request bodies, and the fixed recurrence
//! interval lookup.

pub mod recurrence;
pub mod time;
