//! HTTP routing and OpenAPI documentation configuration.
//!
//! All endpoints are registered here together with their OpenAPI specifications, and
//! Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /login` - Log in with directory credentials
/// - `GET /validate` - Get the user behind the session cookie
/// - `POST /logout` - Clear the session cookie
/// - `GET /api/events/all` - Get every event
/// - `GET /api/events/` - Query events
/// - `POST /api/events/` - Create an event
/// - `GET /api/events/{id}` - Get an event
/// - `PATCH /api/events/{id}` - Update an event
/// - `DELETE /api/events/{id}` - Delete an event
/// - `GET /api/users/all` - Get every user
/// - `GET /api/users/{id}` - Get a user
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Roster", description = "Roster API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::event::EVENT_TAG, description = "Calendar event API routes"),
        (name = controller::user::USER_TAG, description = "User API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::validate))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::event::get_all_events))
        .routes(routes!(
            controller::event::query_events,
            controller::event::create_event
        ))
        .routes(routes!(
            controller::event::get_event,
            controller::event::update_event,
            controller::event::delete_event
        ))
        .routes(routes!(controller::user::get_all_users))
        .routes(routes!(controller::user::get_user))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
