use axum::http::{header, StatusCode};
use roster_test_utils::{
    constant::{TEST_PASSWORD, TEST_USERNAME},
    prelude::*,
};
use serde_json::json;

use crate::util::{get, get_with_bearer, get_with_cookie, json, send, TestSetupExt};

fn login_body(username: &str, password: &str) -> String {
    json!({ "User": username, "Password": password }).to_string()
}

/// Value of the session cookie set by a response
fn session_cookie_value(set_cookie: &str) -> String {
    set_cookie
        .split(';')
        .next()
        .and_then(|pair| pair.strip_prefix("Authorization="))
        .unwrap()
        .to_string()
}

mod login {
    use sea_orm::{EntityTrait, PaginatorTrait};

    use super::*;

    /// Expect a single new Viewer user, its profile and a 90 day session cookie
    #[tokio::test]
    async fn creates_viewer_and_sets_cookie() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;

        let resp = send(
            test.app(),
            json("POST", "/login", &login_body(TEST_USERNAME, TEST_PASSWORD)),
        )
        .await;

        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.body["user"]["username"], TEST_USERNAME);
        assert_eq!(resp.body["user"]["role"], "Viewer");

        let set_cookie = resp.headers.get(header::SET_COOKIE).unwrap().to_str().unwrap();
        assert!(set_cookie.starts_with("Authorization="));
        assert!(set_cookie.contains("Max-Age=7776000"));
        assert!(set_cookie.contains("HttpOnly"));

        let count = entity::prelude::RosterUser::find().count(&test.db).await?;
        assert_eq!(count, 1);

        Ok(())
    }

    /// Expect lower-case credential keys to be accepted
    #[tokio::test]
    async fn accepts_lowercase_keys() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;
        let body = json!({ "user": TEST_USERNAME, "password": TEST_PASSWORD }).to_string();

        let resp = send(test.app(), json("POST", "/login", &body)).await;

        assert_eq!(resp.status, StatusCode::OK);

        Ok(())
    }

    /// Expect the cookie set by login to pass the request gate
    #[tokio::test]
    async fn cookie_validates() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;

        let login = send(
            test.app(),
            json("POST", "/login", &login_body(TEST_USERNAME, TEST_PASSWORD)),
        )
        .await;
        let set_cookie = login.headers.get(header::SET_COOKIE).unwrap().to_str().unwrap();
        let token = session_cookie_value(set_cookie);

        let resp = send(test.app(), get_with_cookie("/validate", &token)).await;

        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.body["user"], login.body["user"]);

        Ok(())
    }

    /// Expect 401 and no cookie for a wrong password
    #[tokio::test]
    async fn rejects_invalid_credentials() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;

        let resp = send(
            test.app(),
            json("POST", "/login", &login_body(TEST_USERNAME, "wrong")),
        )
        .await;

        assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
        assert_eq!(resp.body["error"], "Invalid username and password");
        assert!(resp.headers.get(header::SET_COOKIE).is_none());

        Ok(())
    }

    /// Expect 400 when the directory cannot be reached
    #[tokio::test]
    async fn reports_unreachable_directory() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;

        let resp = send(
            test.app_with_unreachable_directory(),
            json("POST", "/login", &login_body(TEST_USERNAME, TEST_PASSWORD)),
        )
        .await;

        assert_eq!(resp.status, StatusCode::BAD_REQUEST);
        assert_eq!(resp.body["error"], "Unable to connect to LDAP backend");

        Ok(())
    }

    /// Expect 400 for a body that is not valid credentials
    #[tokio::test]
    async fn rejects_unreadable_body() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;

        let resp = send(test.app(), json("POST", "/login", "{\"User\": 42")).await;

        assert_eq!(resp.status, StatusCode::BAD_REQUEST);
        assert_eq!(resp.body["error"], "Failed to read body");

        Ok(())
    }
}

mod validate {
    use chrono::Duration;

    use super::*;

    /// Expect 401 without any credentials
    #[tokio::test]
    async fn rejects_missing_cookie() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;

        let resp = send(test.app(), get("/validate")).await;

        assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
        assert_eq!(resp.body["error"], "Unauthorized");

        Ok(())
    }

    /// Expect 401 for an allow-listed bearer caller, which has no user
    #[tokio::test]
    async fn rejects_bearer_caller() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;

        let resp = send(test.app(), get_with_bearer("/validate")).await;

        assert_eq!(resp.status, StatusCode::UNAUTHORIZED);

        Ok(())
    }

    /// Expect 401 for a correctly signed but expired token
    #[tokio::test]
    async fn rejects_expired_token() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;
        let user = test.user().insert_user(TEST_USERNAME, "Viewer").await?;
        let token = auth::expired_session_token(user.id, Duration::seconds(1))?;

        let resp = send(test.app(), get_with_cookie("/validate", &token)).await;

        assert_eq!(resp.status, StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod logout {
    use axum::{body::Body, http::Request};

    use super::*;

    /// Expect the session cookie to be cleared
    #[tokio::test]
    async fn clears_cookie() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;
        let request = Request::builder()
            .method("POST")
            .uri("/logout")
            .body(Body::empty())
            .unwrap();

        let resp = send(test.app(), request).await;

        assert_eq!(resp.status, StatusCode::OK);
        let set_cookie = resp.headers.get(header::SET_COOKIE).unwrap().to_str().unwrap();
        assert!(set_cookie.starts_with("Authorization=;"));
        assert!(set_cookie.contains("Max-Age=0"));

        Ok(())
    }
}
