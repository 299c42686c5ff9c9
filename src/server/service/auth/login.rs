use sea_orm::DatabaseConnection;

use crate::{
    model::user::{LoginDto, UserDto},
    server::{
        data::user::UserRepository,
        error::Error,
        model::auth::AuthSettings,
        service::auth::{directory::Directory, token::TokenService},
    },
};

/// Role given to users created on their first login.
pub const DEFAULT_ROLE: &str = "Viewer";

pub struct LoginService<'a> {
    db: &'a DatabaseConnection,
    directory: &'a dyn Directory,
    settings: &'a AuthSettings,
}

impl<'a> LoginService<'a> {
    /// Creates a new instance of [`LoginService`]
    pub fn new(
        db: &'a DatabaseConnection,
        directory: &'a dyn Directory,
        settings: &'a AuthSettings,
    ) -> Self {
        Self {
            db,
            directory,
            settings,
        }
    }

    /// Authenticates the credentials against the directory and issues a session token
    ///
    /// The local user is created with the [`DEFAULT_ROLE`] on first login, later logins
    /// reuse the stored row and never change its role.
    ///
    /// # Returns
    /// - `Ok((UserDto, String))` - Profile of the logged in user and their session token
    /// - `Err(Error::AuthError)` - Invalid credentials, unreachable directory or token
    ///   issuance failure
    /// - `Err(Error::DbErr)` - Failed to look up or create the user
    pub async fn login(&self, credentials: LoginDto) -> Result<(UserDto, String), Error> {
        self.directory
            .authenticate(&credentials.user, &credentials.password)
            .await?;

        let user = UserRepository::new(self.db)
            .get_or_create(&credentials.user, DEFAULT_ROLE)
            .await?;

        let token = TokenService::new(self.settings).issue(user.id)?;

        tracing::info!(user_id = %user.id, username = %user.username, "User logged in");

        Ok((user.into(), token))
    }
}
