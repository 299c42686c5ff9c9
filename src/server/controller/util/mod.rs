//! Controller helpers: the request authentication extractor and session cookie builders.

pub mod cookie;
pub mod request_auth;
