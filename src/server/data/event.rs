use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::{EventModel, UserModel};

/// Column values for a new event row
#[derive(Clone, Debug, PartialEq)]
pub struct NewEvent {
    pub event_type: String,
    pub title: String,
    pub start_date: NaiveDateTime,
    pub end_date: Option<NaiveDateTime>,
    pub all_day: bool,
    pub recurring_type: String,
    pub recurring_interval: i64,
    pub user_id: Option<i32>,
}

/// Column changes for an existing event row, `None` leaves the column untouched
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventChanges {
    pub event_type: Option<String>,
    pub title: Option<String>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub all_day: Option<bool>,
    pub recurring_type: Option<String>,
    pub recurring_interval: Option<i64>,
}

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    /// Creates a new instance of [`EventRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, event: NewEvent) -> Result<EventModel, DbErr> {
        let now = Utc::now().naive_utc();

        let event = entity::roster_event::ActiveModel {
            event_type: ActiveValue::Set(event.event_type),
            title: ActiveValue::Set(event.title),
            start_date: ActiveValue::Set(event.start_date),
            end_date: ActiveValue::Set(event.end_date),
            all_day: ActiveValue::Set(event.all_day),
            recurring_type: ActiveValue::Set(event.recurring_type),
            recurring_interval: ActiveValue::Set(event.recurring_interval),
            user_id: ActiveValue::Set(event.user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        event.insert(self.db).await
    }

    /// Gets an event by ID along with its owning user, if any
    pub async fn get_by_id(
        &self,
        event_id: i32,
    ) -> Result<Option<(EventModel, Option<UserModel>)>, DbErr> {
        entity::prelude::RosterEvent::find_by_id(event_id)
            .find_also_related(entity::roster_user::Entity)
            .one(self.db)
            .await
    }

    /// Gets every event matching `condition` along with its owning user, in ID order
    pub async fn find(
        &self,
        condition: Condition,
    ) -> Result<Vec<(EventModel, Option<UserModel>)>, DbErr> {
        entity::prelude::RosterEvent::find()
            .filter(condition)
            .order_by_asc(entity::roster_event::Column::Id)
            .find_also_related(entity::roster_user::Entity)
            .all(self.db)
            .await
    }

    /// Applies `changes` to an event
    ///
    /// Returns `Ok(None)` if the event does not exist.
    pub async fn update(
        &self,
        event_id: i32,
        changes: EventChanges,
    ) -> Result<Option<EventModel>, DbErr> {
        let event = match entity::prelude::RosterEvent::find_by_id(event_id)
            .one(self.db)
            .await?
        {
            Some(event) => event,
            None => return Ok(None),
        };

        let mut event_am = event.into_active_model();
        if let Some(event_type) = changes.event_type {
            event_am.event_type = ActiveValue::Set(event_type);
        }
        if let Some(title) = changes.title {
            event_am.title = ActiveValue::Set(title);
        }
        if let Some(start_date) = changes.start_date {
            event_am.start_date = ActiveValue::Set(start_date);
        }
        if let Some(end_date) = changes.end_date {
            event_am.end_date = ActiveValue::Set(Some(end_date));
        }
        if let Some(all_day) = changes.all_day {
            event_am.all_day = ActiveValue::Set(all_day);
        }
        if let Some(recurring_type) = changes.recurring_type {
            event_am.recurring_type = ActiveValue::Set(recurring_type);
        }
        if let Some(recurring_interval) = changes.recurring_interval {
            event_am.recurring_interval = ActiveValue::Set(recurring_interval);
        }
        event_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let event = event_am.update(self.db).await?;

        Ok(Some(event))
    }

    /// Deletes an event
    ///
    /// Returns OK regardless of the event existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, event_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::RosterEvent::delete_by_id(event_id)
            .exec(self.db)
            .await
    }

    /// Returns the event with the same type and start date as `event`, inserting `event` if
    /// there is none
    ///
    /// # Returns
    /// - `Ok((EventModel, true))` - No matching event existed, `event` was inserted
    /// - `Ok((EventModel, false))` - Matching event already stored, returned unchanged
    pub async fn get_or_create_by_type_and_start(
        &self,
        event: NewEvent,
    ) -> Result<(EventModel, bool), DbErr> {
        let existing = entity::prelude::RosterEvent::find()
            .filter(entity::roster_event::Column::EventType.eq(event.event_type.as_str()))
            .filter(entity::roster_event::Column::StartDate.eq(event.start_date))
            .one(self.db)
            .await?;

        if let Some(existing) = existing {
            return Ok((existing, false));
        }

        let created = self.create(event).await?;

        Ok((created, true))
    }
}
