use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::{api::expands_user, user::UserDto},
    server::util::time::{deserialize_datetime, deserialize_optional_datetime},
};

/// Public representation of a calendar event
///
/// Audit columns are never exposed. `user` is only present when the owning user was
/// requested with `expand=user`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EventDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub event_type: String,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub all_day: bool,
    pub recurring_type: String,
    pub recurring_interval: i64,
    pub user_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
}

/// Body of `POST /api/events/`
///
/// Only `type` and `start_date` are required, every other field falls back to its default:
/// empty title, no end date, all day, no recurrence.
#[derive(Clone, Debug, Deserialize, utoipa::ToSchema)]
pub struct NewEventDto {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(deserialize_with = "deserialize_datetime")]
    #[schema(value_type = String, format = DateTime)]
    pub start_date: NaiveDateTime,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub end_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub all_day: Option<bool>,
    #[serde(default)]
    pub recurring_type: Option<String>,
    #[serde(default)]
    pub recurring_interval: Option<i64>,
}

/// Body of `PATCH /api/events/{id}`, absent fields are left untouched
#[derive(Clone, Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct PatchEventDto {
    #[serde(default, rename = "type")]
    pub event_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub end_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub all_day: Option<bool>,
    #[serde(default)]
    pub recurring_type: Option<String>,
    #[serde(default)]
    pub recurring_interval: Option<i64>,
}

/// Query parameters of `GET /api/events/`
///
/// Values are kept raw so that malformed dates and identifiers can be reported as a 400
/// with a readable message. Empty values are treated as absent.
#[derive(Clone, Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EventQuery {
    /// Single event lookup, takes precedence over every other filter
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub user_id: Option<String>,
    /// Events starting on this calendar day (UTC)
    pub date: Option<String>,
    /// Range start, only applied together with `end_date`
    pub start_date: Option<String>,
    /// Range end, only applied together with `start_date`
    pub end_date: Option<String>,
    /// `user` embeds the owning user in each event
    pub expand: Option<String>,
}

impl EventQuery {
    /// Whether the owning user should be embedded in each event.
    pub fn expand_user(&self) -> bool {
        expands_user(self.expand.as_deref())
    }
}

/// Response of `GET /api/events/`: a single event for ID lookups, a list otherwise
#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum EventQueryResponse {
    Single(EventDto),
    List(Vec<EventDto>),
}
