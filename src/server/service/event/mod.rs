//! Event service layer.
//!
//! Converts stored events into their public shape, applies creation defaults and
//! dispatches filtered queries through [`query`].

pub mod query;

use sea_orm::DatabaseConnection;

use crate::{
    model::event::{EventDto, EventQuery, EventQueryResponse, NewEventDto, PatchEventDto},
    server::{
        data::event::{EventChanges, EventRepository, NewEvent},
        error::{event::EventError, Error},
        model::db::{EventModel, UserModel},
        service::event::query::{EventFilters, QueryShape},
        util::recurrence::resolve_interval,
    },
};

/// Recurrence type stored for one-off events.
pub const NO_RECURRENCE: &str = "None";

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    /// Creates a new instance of [`EventService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every non-null event in ID order
    pub async fn get_all(&self, expand_user: bool) -> Result<Vec<EventDto>, Error> {
        self.find(&QueryShape::All, expand_user).await
    }

    /// Gets a single event
    ///
    /// # Returns
    /// - `Ok(EventDto)` - Event found
    /// - `Err(Error::EventError(EventError::NotFound))` - No event with that ID, or the event
    ///   has an empty type
    pub async fn get_by_id(&self, event_id: i32, expand_user: bool) -> Result<EventDto, Error> {
        let event_repo = EventRepository::new(self.db);

        match event_repo.get_by_id(event_id).await? {
            Some((event, user)) if !event.event_type.is_empty() => {
                Ok(to_dto(event, user, expand_user))
            }
            Some(_) => {
                tracing::debug!(event_id = %event_id, "Found a null event");

                Err(EventError::NotFound(event_id).into())
            }
            None => Err(EventError::NotFound(event_id).into()),
        }
    }

    /// Answers `GET /api/events/` by resolving the query parameters to a single query
    ///
    /// # Returns
    /// - `Ok(EventQueryResponse::Single)` - `id` was supplied and the event exists
    /// - `Ok(EventQueryResponse::List)` - Any other combination, possibly empty
    /// - `Err(Error::EventError)` - Malformed parameters or unknown event ID
    pub async fn query(&self, query: &EventQuery) -> Result<EventQueryResponse, Error> {
        let expand_user = query.expand_user();
        let shape = EventFilters::try_from(query)?.shape();

        tracing::debug!(shape = ?shape, "Dispatching event query");

        match shape {
            QueryShape::ById(event_id) => Ok(EventQueryResponse::Single(
                self.get_by_id(event_id, expand_user).await?,
            )),
            shape => Ok(EventQueryResponse::List(
                self.find(&shape, expand_user).await?,
            )),
        }
    }

    /// Creates an event owned by `user_id`, filling in defaults for absent fields
    ///
    /// # Returns
    /// - `Ok(EventDto)` - Created event
    /// - `Err(Error::InvalidBody)` - Empty event type
    pub async fn create(
        &self,
        event: NewEventDto,
        user_id: Option<i32>,
    ) -> Result<EventDto, Error> {
        if event.event_type.is_empty() {
            return Err(Error::InvalidBody("type must not be empty".to_string()));
        }

        let recurring_type = event
            .recurring_type
            .filter(|recurring_type| !recurring_type.is_empty())
            .unwrap_or_else(|| NO_RECURRENCE.to_string());
        let recurring_interval = resolve_interval(&recurring_type, event.recurring_interval);

        let event = EventRepository::new(self.db)
            .create(NewEvent {
                event_type: event.event_type,
                title: event.title.unwrap_or_default(),
                start_date: event.start_date,
                end_date: event.end_date,
                all_day: event.all_day.unwrap_or(true),
                recurring_type,
                recurring_interval,
                user_id,
            })
            .await?;

        tracing::info!(event_id = %event.id, event_type = %event.event_type, "Created event");

        Ok(to_dto(event, None, false))
    }

    /// Applies a partial update to an event
    ///
    /// Changing the recurrence type without an explicit interval recomputes the interval.
    ///
    /// # Returns
    /// - `Ok(EventDto)` - Updated event
    /// - `Err(Error::InvalidBody)` - Attempt to clear the event type
    /// - `Err(Error::EventError(EventError::NotFound))` - No event with that ID
    pub async fn update(&self, event_id: i32, changes: PatchEventDto) -> Result<EventDto, Error> {
        if changes.event_type.as_deref() == Some("") {
            return Err(Error::InvalidBody("type must not be empty".to_string()));
        }

        let recurring_interval = match (&changes.recurring_type, changes.recurring_interval) {
            (Some(recurring_type), None) => Some(resolve_interval(recurring_type, None)),
            (_, explicit) => explicit,
        };

        let event = EventRepository::new(self.db)
            .update(
                event_id,
                EventChanges {
                    event_type: changes.event_type,
                    title: changes.title,
                    start_date: changes.start_date,
                    end_date: changes.end_date,
                    all_day: changes.all_day,
                    recurring_type: changes.recurring_type,
                    recurring_interval,
                },
            )
            .await?
            .ok_or(EventError::NotFound(event_id))?;

        tracing::info!(event_id = %event.id, "Updated event");

        Ok(to_dto(event, None, false))
    }

    /// Deletes an event
    ///
    /// # Returns
    /// - `Ok(())` - Event deleted
    /// - `Err(Error::EventError(EventError::NotFound))` - No event with that ID
    pub async fn delete(&self, event_id: i32) -> Result<(), Error> {
        let result = EventRepository::new(self.db).delete(event_id).await?;

        if result.rows_affected == 0 {
            return Err(EventError::NotFound(event_id).into());
        }

        tracing::info!(event_id = %event_id, "Deleted event");

        Ok(())
    }

    async fn find(&self, shape: &QueryShape, expand_user: bool) -> Result<Vec<EventDto>, Error> {
        let events = EventRepository::new(self.db)
            .find(shape.condition())
            .await?
            .into_iter()
            .map(|(event, user)| to_dto(event, user, expand_user))
            .collect();

        Ok(events)
    }
}

/// Converts a stored event to its public shape, embedding `user` only when requested.
pub fn to_dto(event: EventModel, user: Option<UserModel>, expand_user: bool) -> EventDto {
    EventDto {
        id: event.id,
        event_type: event.event_type,
        title: event.title,
        start_date: event.start_date.and_utc(),
        end_date: event.end_date.map(|end_date| end_date.and_utc()),
        all_day: event.all_day,
        recurring_type: event.recurring_type,
        recurring_interval: event.recurring_interval,
        user_id: event.user_id,
        user: user.filter(|_| expand_user).map(Into::into),
    }
}
