//! Authentication service layer.
//!
//! Directory binds for login, session token issuance and validation, and the request gate
//! deciding whether a request is bound to a user, comes from a trusted bearer caller, or
//! is rejected.

pub mod directory;
pub mod gate;
pub mod login;
pub mod token;
