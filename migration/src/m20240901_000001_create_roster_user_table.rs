use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RosterUser::Table)
                    .if_not_exists()
                    .col(pk_auto(RosterUser::Id))
                    .col(string_uniq(RosterUser::Username))
                    .col(string(RosterUser::Role))
                    .col(timestamp(RosterUser::CreatedAt))
                    .col(timestamp(RosterUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RosterUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RosterUser {
    Table,
    Id,
    Username,
    Role,
    CreatedAt,
    UpdatedAt,
}
