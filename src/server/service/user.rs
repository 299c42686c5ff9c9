use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{
        data::user::UserRepository,
        error::{user::UserError, Error},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(Into::into).collect())
    }

    /// # Returns
    /// - `Ok(UserDto)` - User found
    /// - `Err(Error::UserError(UserError::NotFound))` - No user with that ID
    pub async fn get_by_id(&self, user_id: i32) -> Result<UserDto, Error> {
        let user = UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        Ok(user.into())
    }
}
