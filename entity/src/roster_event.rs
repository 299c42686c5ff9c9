use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "roster_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_type: String,
    #[sea_orm(default_value = "")]
    pub title: String,
    pub start_date: DateTime,
    pub end_date: Option<DateTime>,
    #[sea_orm(default_value = true)]
    pub all_day: bool,
    #[sea_orm(default_value = "")]
    pub recurring_type: String,
    #[sea_orm(default_value = 0)]
    pub recurring_interval: i64,
    pub user_id: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::roster_user::Entity",
        from = "Column::UserId",
        to = "super::roster_user::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    RosterUser,
}

impl Related<super::roster_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RosterUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
