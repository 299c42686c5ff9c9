//! Event query dispatch.
//!
//! `GET /api/events/` accepts any combination of `id`, `type`, `user_id`, `date` and a
//! `start_date`/`end_date` range. The combination is reduced to exactly one
//! [`QueryShape`], picked by a fixed precedence, which then maps onto a single database
//! condition.

use chrono::NaiveDateTime;
use entity::roster_event::Column;
use sea_orm::{ColumnTrait, Condition};

use crate::{
    model::event::EventQuery,
    server::{
        error::event::EventError,
        util::time::{day_bounds, parse_time},
    },
};

/// Inclusive timestamp range from `start_date` to `end_date`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Parsed and validated query filters
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventFilters {
    pub id: Option<i32>,
    pub event_type: Option<String>,
    pub user_id: Option<i32>,
    pub date: Option<NaiveDateTime>,
    pub range: Option<DateRange>,
}

/// The one query a set of filters resolves to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryShape {
    ById(i32),
    ByType(String),
    ByTypeOnDate(String, NaiveDateTime),
    ByTypeInRange(String, DateRange),
    ByUser(i32),
    ByUserAndType(i32, String),
    ByUserAndTypeOnDate(i32, String, NaiveDateTime),
    ByUserAndTypeInRange(i32, String, DateRange),
    OnDate(NaiveDateTime),
    InRange(DateRange),
    All,
}

impl TryFrom<&EventQuery> for EventFilters {
    type Error = EventError;

    /// # Returns
    /// - `Ok(EventFilters)` - Every present value parsed
    /// - `Err(EventError::InvalidQuery)` - Non-numeric ID, unparseable date, or only one end
    ///   of a range supplied
    fn try_from(query: &EventQuery) -> Result<Self, Self::Error> {
        let start_date = present(&query.start_date).map(parse_date).transpose()?;
        let end_date = present(&query.end_date).map(parse_date).transpose()?;

        let range = match (start_date, end_date) {
            (Some(start), Some(end)) => Some(DateRange { start, end }),
            (None, None) => None,
            _ => {
                return Err(EventError::InvalidQuery(
                    "start_date and end_date must be supplied together".to_string(),
                ))
            }
        };

        Ok(Self {
            id: present(&query.id).map(|id| parse_id("id", id)).transpose()?,
            event_type: present(&query.event_type).map(str::to_string),
            user_id: present(&query.user_id)
                .map(|user_id| parse_id("user_id", user_id))
                .transpose()?,
            date: present(&query.date).map(parse_day).transpose()?,
            range,
        })
    }
}

impl EventFilters {
    /// Resolves the filters to a single query, the first matching rule wins:
    ///
    /// 1. `id`
    /// 2. `type` alone
    /// 3. `type` and `date`
    /// 4. `type` and range
    /// 5. `user_id` alone
    /// 6. `user_id` and `type`
    /// 7. `user_id`, `type` and `date`
    /// 8. `user_id`, `type` and range
    /// 9. `date`
    /// 10. range
    /// 11. everything
    ///
    /// Rules 2 to 8 only consider `type` and `user_id`, so for example `user_id` with a
    /// `date` but no `type` is answered by rule 9.
    pub fn shape(self) -> QueryShape {
        match (self.id, self.event_type, self.user_id, self.date, self.range) {
            (Some(id), ..) => QueryShape::ById(id),
            (None, Some(event_type), None, None, None) => QueryShape::ByType(event_type),
            (None, Some(event_type), None, Some(date), _) => {
                QueryShape::ByTypeOnDate(event_type, date)
            }
            (None, Some(event_type), None, None, Some(range)) => {
                QueryShape::ByTypeInRange(event_type, range)
            }
            (None, None, Some(user_id), None, None) => QueryShape::ByUser(user_id),
            (None, Some(event_type), Some(user_id), None, None) => {
                QueryShape::ByUserAndType(user_id, event_type)
            }
            (None, Some(event_type), Some(user_id), Some(date), None) => {
                QueryShape::ByUserAndTypeOnDate(user_id, event_type, date)
            }
            (None, Some(event_type), Some(user_id), _, Some(range)) => {
                QueryShape::ByUserAndTypeInRange(user_id, event_type, range)
            }
            (None, _, _, Some(date), _) => QueryShape::OnDate(date),
            (None, _, _, None, Some(range)) => QueryShape::InRange(range),
            (None, _, _, None, None) => QueryShape::All,
        }
    }
}

impl QueryShape {
    /// Database condition selecting the rows of this shape.
    ///
    /// Rows with an empty type are excluded from every shape except [`QueryShape::ById`],
    /// whose caller reports them as not found instead.
    pub fn condition(&self) -> Condition {
        let condition = match self {
            Self::ById(id) => return Condition::all().add(Column::Id.eq(*id)),
            Self::ByType(event_type) => {
                Condition::all().add(Column::EventType.eq(event_type.as_str()))
            }
            Self::ByTypeOnDate(event_type, date) => Condition::all()
                .add(Column::EventType.eq(event_type.as_str()))
                .add(on_date(*date)),
            Self::ByTypeInRange(event_type, range) => Condition::all()
                .add(Column::EventType.eq(event_type.as_str()))
                .add(in_range(range)),
            Self::ByUser(user_id) => Condition::all().add(Column::UserId.eq(*user_id)),
            Self::ByUserAndType(user_id, event_type) => Condition::all()
                .add(Column::UserId.eq(*user_id))
                .add(Column::EventType.eq(event_type.as_str())),
            Self::ByUserAndTypeOnDate(user_id, event_type, date) => Condition::all()
                .add(Column::UserId.eq(*user_id))
                .add(Column::EventType.eq(event_type.as_str()))
                .add(on_date(*date)),
            Self::ByUserAndTypeInRange(user_id, event_type, range) => Condition::all()
                .add(Column::UserId.eq(*user_id))
                .add(Column::EventType.eq(event_type.as_str()))
                .add(in_range(range)),
            Self::OnDate(date) => on_date(*date),
            Self::InRange(range) => in_range(range),
            Self::All => Condition::all(),
        };

        Condition::all()
            .add(condition)
            .add(Column::EventType.ne(""))
    }
}

/// Start timestamp within the calendar day of `date`.
fn on_date(date: NaiveDateTime) -> Condition {
    match day_bounds(date) {
        Some((start, end)) => Condition::all()
            .add(Column::StartDate.gte(start))
            .add(Column::StartDate.lt(end)),
        None => Condition::all()
            .add(Column::StartDate.gte(date.date().and_time(chrono::NaiveTime::MIN))),
    }
}

/// Fully inside the range, or an all day event starting inside it.
fn in_range(range: &DateRange) -> Condition {
    Condition::any()
        .add(
            Condition::all()
                .add(Column::StartDate.gte(range.start))
                .add(Column::EndDate.lte(range.end)),
        )
        .add(
            Condition::all()
                .add(Column::StartDate.between(range.start, range.end))
                .add(Column::AllDay.eq(true)),
        )
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

fn parse_id(name: &str, value: &str) -> Result<i32, EventError> {
    value
        .parse::<i32>()
        .map_err(|_| EventError::InvalidQuery(format!("{} must be an integer", name)))
}

fn parse_date(value: &str) -> Result<NaiveDateTime, EventError> {
    parse_time(value).map_err(|_| EventError::InvalidQuery(format!("Invalid date: {}", value)))
}

/// A `date` filter must name a day whose end is still representable.
fn parse_day(value: &str) -> Result<NaiveDateTime, EventError> {
    let date = parse_date(value)?;

    day_bounds(date)
        .map(|_| date)
        .ok_or_else(|| EventError::InvalidQuery(format!("Date out of range: {}", value)))
}
