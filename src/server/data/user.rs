use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::db::UserModel;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::RosterUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::RosterUser::find()
            .filter(entity::roster_user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::RosterUser::find()
            .order_by_asc(entity::roster_user::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns the user with `username`, inserting it with `role` if absent
    ///
    /// The insert ignores username conflicts so concurrent callers racing on the same
    /// username all end up with the single stored row. The role of an existing user is
    /// never changed.
    pub async fn get_or_create(&self, username: &str, role: &str) -> Result<UserModel, DbErr> {
        let now = Utc::now().naive_utc();
        let user = entity::roster_user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            role: ActiveValue::Set(role.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::RosterUser::insert(user)
            .on_conflict(
                OnConflict::column(entity::roster_user::Column::Username)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        self.get_by_username(username).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("user {:?} missing after first-or-create", username))
        })
    }
}
