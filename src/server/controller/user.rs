use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{UserDto, UserResponseDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::RequestAuth},
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// Get every user
#[utoipa::path(
    get,
    path = "/api/users/all",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(
    _auth: RequestAuth,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Get a single user
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserResponseDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    _auth: RequestAuth,
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).get_by_id(user_id).await?;

    Ok((StatusCode::OK, Json(UserResponseDto { user })))
}
