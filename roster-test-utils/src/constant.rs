//! Test configuration constants.
//!
//! Placeholder secrets and credentials shared by unit and integration tests. None of these
//! are real credentials.

/// Secret used to sign session tokens in tests.
pub static TEST_JWT_SECRET: &str = "test_jwt_secret";

/// Static bearer token placed on the allow-list in tests.
pub static TEST_ALLOWED_TOKEN: &str = "test_allowed_token";

/// Username accepted by test directories.
pub static TEST_USERNAME: &str = "einstein";

/// Password accepted by test directories for [`TEST_USERNAME`].
pub static TEST_PASSWORD: &str = "password";

/// Path the mock holiday feed is served from.
pub static TEST_HOLIDAY_FEED_PATH: &str = "/bank-holidays.json";
