use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, UserResponseDto},
    },
    server::{
        controller::util::cookie::{removal_cookie, session_cookie},
        error::Error,
        model::{app::AppState, auth::RequestAuth},
        service::auth::login::LoginService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Log in with directory credentials
///
/// Binds against the directory with the submitted credentials, creating the local user on
/// first login, and sets the session cookie.
///
/// # Responses
/// - 200 (OK): Logged in, body carries the user profile and the session cookie is set
/// - 400 (Bad Request): Unreadable body or directory unreachable
/// - 401 (Unauthorized): Invalid username or password
/// - 500 (Internal Server Error): Token issuance or database failure
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in, session cookie set", body = UserResponseDto),
        (status = 400, description = "Unreadable body or directory unreachable", body = ErrorDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(credentials) = payload.map_err(|e| Error::InvalidBody(e.body_text()))?;

    let login_service = LoginService::new(&state.db, state.directory.as_ref(), &state.auth);
    let (user, token) = login_service.login(credentials).await?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, session_cookie(token).to_string())],
        Json(UserResponseDto { user }),
    ))
}

/// Get the user behind the session cookie
///
/// # Responses
/// - 200 (OK): Session valid, body carries the user profile
/// - 401 (Unauthorized): No valid session, or an allow-listed bearer caller without a user
#[utoipa::path(
    get,
    path = "/validate",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session valid", body = UserResponseDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn validate(auth: RequestAuth) -> Result<impl IntoResponse, Error> {
    let user = auth.require_user()?;

    Ok((StatusCode::OK, Json(UserResponseDto { user })))
}

/// Log out by clearing the session cookie
///
/// Tokens are stateless, a copied token stays valid until it expires.
#[utoipa::path(
    post,
    path = "/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cookie cleared")
    ),
)]
pub async fn logout() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::SET_COOKIE, removal_cookie().to_string())],
    )
}
