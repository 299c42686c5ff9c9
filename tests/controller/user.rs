use axum::http::StatusCode;
use roster_test_utils::prelude::*;

use crate::util::{get_with_bearer, get_with_cookie, send, TestSetupExt};

mod get_all_users {
    use super::*;

    /// Expect public profiles for every user
    #[tokio::test]
    async fn returns_profiles() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;
        let alice = test.user().insert_user("alice", "Viewer").await?;
        test.user().insert_user("bank-holiday-bot", "bot").await?;
        let token = auth::session_token(alice.id)?;

        let resp = send(test.app(), get_with_cookie("/api/users/all", &token)).await;

        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.body.as_array().unwrap().len(), 2);
        assert_eq!(resp.body[0]["username"], "alice");
        assert_eq!(resp.body[1]["role"], "bot");
        assert!(resp.body[0].get("created_at").is_none());

        Ok(())
    }
}

mod get_user {
    use super::*;

    /// Expect the profile wrapped in a user envelope
    #[tokio::test]
    async fn returns_profile() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;
        let alice = test.user().insert_user("alice", "Viewer").await?;

        let uri = format!("/api/users/{}", alice.id);
        let resp = send(test.app(), get_with_bearer(&uri)).await;

        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.body["user"]["id"], alice.id);
        assert_eq!(resp.body["user"]["username"], "alice");

        Ok(())
    }

    /// Expect 404 for an unknown user
    #[tokio::test]
    async fn returns_not_found() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;

        let resp = send(test.app(), get_with_bearer("/api/users/7")).await;

        assert_eq!(resp.status, StatusCode::NOT_FOUND);
        assert_eq!(resp.body["error"], "User not found.");

        Ok(())
    }
}
