//! Data access layer repositories.
//!
//! Repositories are thin wrappers over SeaORM queries, generic over [`sea_orm::ConnectionTrait`]
//! so the same code runs against a pooled connection or a transaction. They hold no state
//! beyond the borrowed connection.

pub mod event;
pub mod user;
