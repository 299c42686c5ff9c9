use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(
        &self,
        username: &str,
        role: &str,
    ) -> Result<entity::roster_user::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::RosterUser::insert(entity::roster_user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                role: ActiveValue::Set(role.to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
