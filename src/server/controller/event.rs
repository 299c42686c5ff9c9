use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, ExpandQuery},
        event::{EventDto, EventQuery, EventQueryResponse, NewEventDto, PatchEventDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::RequestAuth},
        service::event::EventService,
    },
};

pub static EVENT_TAG: &str = "event";

/// Get every event
#[utoipa::path(
    get,
    path = "/api/events/all",
    tag = EVENT_TAG,
    params(ExpandQuery),
    responses(
        (status = 200, description = "All events", body = Vec<EventDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_events(
    _auth: RequestAuth,
    State(state): State<AppState>,
    Query(params): Query<ExpandQuery>,
) -> Result<impl IntoResponse, Error> {
    let events = EventService::new(&state.db)
        .get_all(params.expand_user())
        .await?;

    Ok((StatusCode::OK, Json(events)))
}

/// Query events by any combination of ID, type, user, date and date range
///
/// The combination of supplied parameters picks a single query, see [`EventFilters::shape`]
/// for the precedence. An `id` lookup returns a single event, every other query a list.
///
/// [`EventFilters::shape`]: crate::server::service::event::query::EventFilters::shape
#[utoipa::path(
    get,
    path = "/api/events/",
    tag = EVENT_TAG,
    params(EventQuery),
    responses(
        (status = 200, description = "Matching event or events", body = EventQueryResponse),
        (status = 400, description = "Malformed query parameters", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Event ID not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn query_events(
    _auth: RequestAuth,
    State(state): State<AppState>,
    Query(query): Query<EventQuery>,
) -> Result<impl IntoResponse, Error> {
    let response = EventService::new(&state.db).query(&query).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Get a single event
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID"),
        ExpandQuery
    ),
    responses(
        (status = 200, description = "Event found", body = EventDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    _auth: RequestAuth,
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
    Query(params): Query<ExpandQuery>,
) -> Result<impl IntoResponse, Error> {
    let event = EventService::new(&state.db)
        .get_by_id(event_id, params.expand_user())
        .await?;

    Ok((StatusCode::OK, Json(event)))
}

/// Create an event
///
/// The event is owned by the logged in user. Allow-listed bearer callers create events
/// without an owner.
#[utoipa::path(
    post,
    path = "/api/events/",
    tag = EVENT_TAG,
    request_body = NewEventDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 400, description = "Unreadable body or missing type", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    auth: RequestAuth,
    State(state): State<AppState>,
    payload: Result<Json<NewEventDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(new_event) = payload.map_err(|e| Error::InvalidBody(e.body_text()))?;

    let owner = auth.user().map(|user| user.id);
    let event = EventService::new(&state.db).create(new_event, owner).await?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// Update the supplied fields of an event
#[utoipa::path(
    patch,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    request_body = PatchEventDto,
    responses(
        (status = 200, description = "Event updated", body = EventDto),
        (status = 400, description = "Unreadable body", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    _auth: RequestAuth,
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
    payload: Result<Json<PatchEventDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(changes) = payload.map_err(|e| Error::InvalidBody(e.body_text()))?;

    let event = EventService::new(&state.db)
        .update(event_id, changes)
        .await?;

    Ok((StatusCode::OK, Json(event)))
}

/// Delete an event
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event deleted", body = DataDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    _auth: RequestAuth,
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    EventService::new(&state.db).delete(event_id).await?;

    Ok((StatusCode::OK, Json(DataDto { data: true })))
}
