//! Shared helpers for router level tests.
//!
//! Builds an [`AppState`] over the test database with an in-process directory, and sends
//! requests through the full router.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use roster::server::{
    error::auth::AuthError,
    model::{app::AppState, auth::AuthSettings},
    router,
    service::auth::directory::Directory,
};
use roster_test_utils::{
    constant::{TEST_ALLOWED_TOKEN, TEST_JWT_SECRET, TEST_PASSWORD, TEST_USERNAME},
    TestSetup,
};
use serde_json::Value;
use tower::ServiceExt;

/// Directory knowing only the test user
pub struct StubDirectory {
    pub reachable: bool,
}

#[async_trait]
impl Directory for StubDirectory {
    async fn authenticate(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if !self.reachable {
            return Err(AuthError::DirectoryUnavailable(
                "connection refused".to_string(),
            ));
        }

        if username == TEST_USERNAME && password == TEST_PASSWORD {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials(username.to_string()))
        }
    }
}

pub fn test_auth_settings() -> AuthSettings {
    AuthSettings {
        jwt_secret: TEST_JWT_SECRET.to_string(),
        allowed_tokens: vec![TEST_ALLOWED_TOKEN.to_string()],
    }
}

/// Extension trait for TestSetup to build the application
pub trait TestSetupExt {
    fn into_app_state(&self) -> AppState;

    /// Full router with a reachable directory
    fn app(&self) -> Router;

    /// Full router whose directory cannot be reached
    fn app_with_unreachable_directory(&self) -> Router;
}

impl TestSetupExt for TestSetup {
    fn into_app_state(&self) -> AppState {
        AppState::new(
            self.db.clone(),
            Arc::new(StubDirectory { reachable: true }),
            test_auth_settings(),
        )
    }

    fn app(&self) -> Router {
        router::routes().with_state(self.into_app_state())
    }

    fn app_with_unreachable_directory(&self) -> Router {
        let state = AppState::new(
            self.db.clone(),
            Arc::new(StubDirectory { reachable: false }),
            test_auth_settings(),
        );

        router::routes().with_state(state)
    }
}

/// Response parts collected for assertions
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Sends `request` through `app`, decoding the body as JSON (`Null` when empty)
pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

/// GET request without any credentials
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// GET request carrying a session cookie
pub fn get_with_cookie(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, format!("Authorization={}", token))
        .body(Body::empty())
        .unwrap()
}

/// GET request carrying the allow-listed bearer token and no cookie
pub fn get_with_bearer(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", TEST_ALLOWED_TOKEN))
        .body(Body::empty())
        .unwrap()
}

/// Request without a body carrying a session cookie
pub fn empty_with_cookie(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::COOKIE, format!("Authorization={}", token))
        .body(Body::empty())
        .unwrap()
}

/// Request with a JSON body carrying a session cookie
pub fn json_with_cookie(method: &str, uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::COOKIE, format!("Authorization={}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Request with a raw JSON body and no credentials
pub fn json(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
