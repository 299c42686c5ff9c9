//! Mock public holiday feed endpoints.
//!
//! The feed mirrors the shape of the gov.uk bank holiday document: one object per
//! division, each holding a list of dated events.

use mockito::Mock;
use serde_json::{json, Value};

use crate::{constant::TEST_HOLIDAY_FEED_PATH, TestSetup};

impl TestSetup {
    pub fn holiday<'a>(&'a mut self) -> HolidayFixtures<'a> {
        HolidayFixtures { setup: self }
    }
}

pub struct HolidayFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> HolidayFixtures<'a> {
    /// Builds a feed document whose England and Wales division contains `events`
    ///
    /// `events` are `(title, date)` pairs with dates formatted `YYYY-MM-DD`. The other
    /// divisions carry a single event each that must never be imported.
    pub fn feed(&self, events: &[(&str, &str)]) -> Value {
        let events: Vec<Value> = events
            .iter()
            .map(|(title, date)| {
                json!({
                    "title": title,
                    "date": date,
                    "notes": "",
                    "bunting": true,
                })
            })
            .collect();

        json!({
            "england-and-wales": {
                "division": "england-and-wales",
                "events": events,
            },
            "scotland": {
                "division": "scotland",
                "events": [
                    { "title": "St Andrew's Day", "date": "2024-12-02", "notes": "Substitute day", "bunting": true }
                ],
            },
            "northern-ireland": {
                "division": "northern-ireland",
                "events": [
                    { "title": "St Patrick's Day", "date": "2024-03-18", "notes": "Substitute day", "bunting": true }
                ],
            },
        })
    }

    /// Create a mock feed endpoint serving `events` `expected_requests` times
    pub fn create_feed_endpoint(
        &mut self,
        events: &[(&str, &str)],
        expected_requests: usize,
    ) -> Mock {
        let body = self.feed(events).to_string();

        self.setup
            .server
            .mock("GET", TEST_HOLIDAY_FEED_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock feed endpoint that fails with `status`
    pub fn create_failing_feed_endpoint(&mut self, status: usize, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", TEST_HOLIDAY_FEED_PATH)
            .with_status(status)
            .expect(expected_requests)
            .create()
    }
}
