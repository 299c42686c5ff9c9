use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240901_000001_create_roster_user_table::RosterUser;

static IDX_ROSTER_EVENT_TYPE_START_DATE: &str = "idx_roster_event_type_start_date";
static IDX_ROSTER_EVENT_USER_ID: &str = "idx_roster_event_user_id";
static FK_ROSTER_EVENT_USER_ID: &str = "fk_roster_event_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RosterEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(RosterEvent::Id))
                    .col(string(RosterEvent::EventType))
                    .col(string(RosterEvent::Title).default(""))
                    .col(timestamp(RosterEvent::StartDate))
                    .col(timestamp_null(RosterEvent::EndDate))
                    .col(boolean(RosterEvent::AllDay).default(true))
                    .col(string(RosterEvent::RecurringType).default(""))
                    .col(big_integer(RosterEvent::RecurringInterval).default(0))
                    .col(integer_null(RosterEvent::UserId))
                    .col(timestamp(RosterEvent::CreatedAt))
                    .col(timestamp(RosterEvent::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ROSTER_EVENT_TYPE_START_DATE)
                    .table(RosterEvent::Table)
                    .col(RosterEvent::EventType)
                    .col(RosterEvent::StartDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ROSTER_EVENT_USER_ID)
                    .table(RosterEvent::Table)
                    .col(RosterEvent::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ROSTER_EVENT_USER_ID)
                    .from_tbl(RosterEvent::Table)
                    .from_col(RosterEvent::UserId)
                    .to_tbl(RosterUser::Table)
                    .to_col(RosterUser::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ROSTER_EVENT_USER_ID)
                    .table(RosterEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ROSTER_EVENT_USER_ID)
                    .table(RosterEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ROSTER_EVENT_TYPE_START_DATE)
                    .table(RosterEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RosterEvent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RosterEvent {
    Table,
    Id,
    EventType,
    Title,
    StartDate,
    EndDate,
    AllDay,
    RecurringType,
    RecurringInterval,
    UserId,
    CreatedAt,
    UpdatedAt,
}
