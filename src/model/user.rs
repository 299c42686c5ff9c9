use serde::{Deserialize, Serialize};

/// Public profile of a user, never carrying credentials or tokens
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub role: String,
}

/// `{"user": ...}` envelope used by login, validate and user lookup
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserResponseDto {
    pub user: UserDto,
}

/// Credentials submitted to `POST /login`
#[derive(Clone, Deserialize, utoipa::ToSchema)]
pub struct LoginDto {
    #[serde(rename = "User", alias = "user")]
    pub user: String,
    #[serde(rename = "Password", alias = "password")]
    pub password: String,
}
