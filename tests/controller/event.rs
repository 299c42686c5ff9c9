use axum::http::StatusCode;
use roster_test_utils::prelude::*;
use serde_json::{json, Value};

use crate::util::{
    empty_with_cookie, get, get_with_bearer, get_with_cookie, json_with_cookie, send,
    TestSetupExt,
};

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|event| event["id"].as_i64().unwrap())
        .collect()
}

mod get_all_events {
    use super::*;

    /// Expect the allow-listed bearer token to bypass the session cookie
    #[tokio::test]
    async fn bearer_bypasses_cookie() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;
        let event = test
            .event()
            .insert_event("DutyTech1", "2024-01-05", None)
            .await?;

        let resp = send(test.app(), get_with_bearer("/api/events/all")).await;

        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(ids(&resp.body), vec![event.id as i64]);

        Ok(())
    }

    /// Expect 401 without credentials
    #[tokio::test]
    async fn rejects_anonymous_request() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;

        let resp = send(test.app(), get("/api/events/all")).await;

        assert_eq!(resp.status, StatusCode::UNAUTHORIZED);

        Ok(())
    }

    /// Expect null events to be left out
    #[tokio::test]
    async fn excludes_null_events() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;
        let event = test
            .event()
            .insert_event("DutyTech1", "2024-01-05", None)
            .await?;
        test.event().insert_event("", "2024-01-06", None).await?;

        let resp = send(test.app(), get_with_bearer("/api/events/all")).await;

        assert_eq!(ids(&resp.body), vec![event.id as i64]);

        Ok(())
    }
}

mod query_events {
    use super::*;

    /// Expect only the user's events of the type satisfying the range rule
    #[tokio::test]
    async fn filters_by_user_type_and_range() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;
        let user = test.user().insert_user("alice", "Viewer").await?;
        let other = test.user().insert_user("bob", "Viewer").await?;
        let token = auth::session_token(user.id)?;

        let inside = test
            .event()
            .insert_ranged_event(
                "DutyTech1",
                "2024-01-08T08:00:00",
                Some("2024-01-08T18:00:00"),
                false,
                Some(user.id),
            )
            .await?;
        let all_day = test
            .event()
            .insert_ranged_event(
                "DutyTech1",
                "2024-01-29",
                Some("2024-02-04"),
                true,
                Some(user.id),
            )
            .await?;
        test.event()
            .insert_ranged_event(
                "DutyTech1",
                "2024-01-29T08:00:00",
                Some("2024-02-04T18:00:00"),
                false,
                Some(user.id),
            )
            .await?;
        test.event()
            .insert_event("DutyTech1", "2024-01-08", Some(other.id))
            .await?;
        test.event()
            .insert_event("DutyTech2", "2024-01-08", Some(user.id))
            .await?;

        let uri = format!(
            "/api/events/?user_id={}&type=DutyTech1&start_date=2024-01-01&end_date=2024-01-31",
            user.id
        );
        let resp = send(test.app(), get_with_cookie(&uri, &token)).await;

        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(ids(&resp.body), vec![inside.id as i64, all_day.id as i64]);

        Ok(())
    }

    /// Expect a single event object for an ID lookup
    #[tokio::test]
    async fn returns_single_event_for_id() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;
        let event = test
            .event()
            .insert_event("DutyTech1", "2024-01-05", None)
            .await?;

        let uri = format!("/api/events/?id={}&type=ignored", event.id);
        let resp = send(test.app(), get_with_bearer(&uri)).await;

        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.body["id"], event.id);
        assert_eq!(resp.body["type"], "DutyTech1");

        Ok(())
    }

    /// Expect the owning user embedded on request
    #[tokio::test]
    async fn expands_user() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;
        let user = test.user().insert_user("alice", "Viewer").await?;
        test.event()
            .insert_event("DutyTech1", "2024-01-05", Some(user.id))
            .await?;

        let resp = send(
            test.app(),
            get_with_bearer("/api/events/?type=DutyTech1&expand=user"),
        )
        .await;

        assert_eq!(resp.body[0]["user"]["username"], "alice");

        let resp = send(test.app(), get_with_bearer("/api/events/?type=DutyTech1")).await;

        assert!(resp.body[0].get("user").is_none());

        Ok(())
    }

    /// Expect 400 for a range with only one end
    #[tokio::test]
    async fn rejects_half_range() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;

        let resp = send(
            test.app(),
            get_with_bearer("/api/events/?start_date=2024-01-01"),
        )
        .await;

        assert_eq!(resp.status, StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 400 for an unparseable date
    #[tokio::test]
    async fn rejects_invalid_date() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;

        let resp = send(test.app(), get_with_bearer("/api/events/?date=tomorrow")).await;

        assert_eq!(resp.status, StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 400 for a date whose following day cannot be represented
    #[tokio::test]
    async fn rejects_date_at_end_of_calendar() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;

        let resp = send(
            test.app(),
            get_with_bearer("/api/events/?type=DutyTech1&date=%2B262142-12-31"),
        )
        .await;

        assert_eq!(resp.status, StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect every event when no filter is supplied
    #[tokio::test]
    async fn falls_back_to_all_events() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;
        let first = test
            .event()
            .insert_event("DutyTech1", "2024-01-05", None)
            .await?;
        let second = test
            .event()
            .insert_event("bank_holiday", "2024-12-25", None)
            .await?;

        let resp = send(test.app(), get_with_bearer("/api/events/")).await;

        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(ids(&resp.body), vec![first.id as i64, second.id as i64]);

        Ok(())
    }
}

mod get_event {
    use super::*;

    /// Expect 404 for an unknown event
    #[tokio::test]
    async fn returns_not_found() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;

        let resp = send(test.app(), get_with_bearer("/api/events/42")).await;

        assert_eq!(resp.status, StatusCode::NOT_FOUND);
        assert_eq!(resp.body["error"], "Event not found.");

        Ok(())
    }

    /// Expect 404 for a null event
    #[tokio::test]
    async fn hides_null_event() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;
        let event = test.event().insert_event("", "2024-01-05", None).await?;

        let uri = format!("/api/events/{}", event.id);
        let resp = send(test.app(), get_with_bearer(&uri)).await;

        assert_eq!(resp.status, StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod create_event {
    use super::*;

    /// Expect 201 with defaults for every omitted field, owned by the caller
    #[tokio::test]
    async fn applies_defaults() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;
        let user = test.user().insert_user("alice", "Viewer").await?;
        let token = auth::session_token(user.id)?;

        let resp = send(
            test.app(),
            json_with_cookie(
                "POST",
                "/api/events/",
                &token,
                json!({ "type": "DutyTech1", "start_date": "2024-01-05T09:00:00" }),
            ),
        )
        .await;

        assert_eq!(resp.status, StatusCode::CREATED);
        assert_eq!(resp.body["type"], "DutyTech1");
        assert_eq!(resp.body["title"], "");
        assert_eq!(resp.body["end_date"], Value::Null);
        assert_eq!(resp.body["all_day"], true);
        assert_eq!(resp.body["recurring_interval"], 0);
        assert_eq!(resp.body["user_id"], user.id);

        let uri = format!("/api/events/{}", resp.body["id"]);
        let fetched = send(test.app(), get_with_cookie(&uri, &token)).await;

        assert_eq!(fetched.status, StatusCode::OK);
        assert_eq!(fetched.body, resp.body);

        Ok(())
    }

    /// Expect 400 when the type is missing
    #[tokio::test]
    async fn rejects_missing_type() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;
        let user = test.user().insert_user("alice", "Viewer").await?;
        let token = auth::session_token(user.id)?;

        let resp = send(
            test.app(),
            json_with_cookie(
                "POST",
                "/api/events/",
                &token,
                json!({ "start_date": "2024-01-05" }),
            ),
        )
        .await;

        assert_eq!(resp.status, StatusCode::BAD_REQUEST);
        assert_eq!(resp.body["error"], "Failed to read body");

        Ok(())
    }
}

mod update_event {
    use super::*;

    /// Expect only the supplied fields to change
    #[tokio::test]
    async fn updates_supplied_fields() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;
        let user = test.user().insert_user("alice", "Viewer").await?;
        let token = auth::session_token(user.id)?;
        let event = test
            .event()
            .insert_event("DutyTech1", "2024-01-05", Some(user.id))
            .await?;

        let uri = format!("/api/events/{}", event.id);
        let resp = send(
            test.app(),
            json_with_cookie(
                "PATCH",
                &uri,
                &token,
                json!({ "title": "Swapped shift", "recurring_type": "weekly" }),
            ),
        )
        .await;

        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.body["title"], "Swapped shift");
        assert_eq!(resp.body["recurring_type"], "weekly");
        assert_eq!(resp.body["recurring_interval"], 604_800);
        assert_eq!(resp.body["type"], "DutyTech1");

        Ok(())
    }

    /// Expect 404 for an unknown event
    #[tokio::test]
    async fn returns_not_found() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;
        let user = test.user().insert_user("alice", "Viewer").await?;
        let token = auth::session_token(user.id)?;

        let resp = send(
            test.app(),
            json_with_cookie("PATCH", "/api/events/42", &token, json!({ "title": "x" })),
        )
        .await;

        assert_eq!(resp.status, StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod delete_event {
    use super::*;

    /// Expect `{"data": true}` and then 404 on the second attempt
    #[tokio::test]
    async fn deletes_event() -> Result<(), TestError> {
        let test = test_setup_with_roster_tables!()?;
        let user = test.user().insert_user("alice", "Viewer").await?;
        let token = auth::session_token(user.id)?;
        let event = test
            .event()
            .insert_event("DutyTech1", "2024-01-05", None)
            .await?;

        let uri = format!("/api/events/{}", event.id);
        let first = send(test.app(), empty_with_cookie("DELETE", &uri, &token)).await;
        let second = send(test.app(), empty_with_cookie("DELETE", &uri, &token)).await;

        assert_eq!(first.status, StatusCode::OK);
        assert_eq!(first.body, json!({ "data": true }));
        assert_eq!(second.status, StatusCode::NOT_FOUND);

        Ok(())
    }
}
