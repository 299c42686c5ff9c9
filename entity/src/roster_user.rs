use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "roster_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub role: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::roster_event::Entity")]
    RosterEvent,
}

impl Related<super::roster_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RosterEvent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
