use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::factory, TestSetup};

impl TestSetup {
    pub fn event<'a>(&'a self) -> EventFixtures<'a> {
        EventFixtures { setup: self }
    }
}

pub struct EventFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> EventFixtures<'a> {
    /// Inserts an all day, non-recurring event without an end date
    pub async fn insert_event(
        &self,
        event_type: &str,
        start_date: &str,
        user_id: Option<i32>,
    ) -> Result<entity::roster_event::Model, TestError> {
        self.insert_ranged_event(event_type, start_date, None, true, user_id)
            .await
    }

    /// Inserts a non-recurring event spanning `start_date` to `end_date`
    ///
    /// Dates accept the formats supported by [`factory::timestamp`].
    pub async fn insert_ranged_event(
        &self,
        event_type: &str,
        start_date: &str,
        end_date: Option<&str>,
        all_day: bool,
        user_id: Option<i32>,
    ) -> Result<entity::roster_event::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::RosterEvent::insert(entity::roster_event::ActiveModel {
                event_type: ActiveValue::Set(event_type.to_string()),
                title: ActiveValue::Set(format!("{} event", event_type)),
                start_date: ActiveValue::Set(factory::timestamp(start_date)),
                end_date: ActiveValue::Set(end_date.map(factory::timestamp)),
                all_day: ActiveValue::Set(all_day),
                recurring_type: ActiveValue::Set("None".to_string()),
                recurring_interval: ActiveValue::Set(0),
                user_id: ActiveValue::Set(user_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
