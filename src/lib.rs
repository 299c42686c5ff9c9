//! Calendar and duty scheduling API.
//!
//! `roster` exposes a REST API over calendar events, authenticates users against an LDAP
//! directory with signed session cookies, and keeps public holidays imported from an
//! external feed on a fixed schedule.

pub mod model;
pub mod server;
