//! Server application core modules.
//!
//! HTTP routing and handlers, directory login and session tokens, event storage and
//! querying, and the scheduled public holiday import.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
