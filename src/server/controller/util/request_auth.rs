use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::{
    error::Error,
    model::{app::AppState, auth::RequestAuth},
    service::auth::gate::GateService,
};

/// Runs the request gate before the handler
///
/// Handlers taking a [`RequestAuth`] are only reached by authenticated or allow-listed
/// callers, everything else is rejected with the gate's error response.
impl FromRequestParts<AppState> for RequestAuth {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        GateService::new(&state.db, &state.auth)
            .authorize(&parts.headers)
            .await
    }
}
