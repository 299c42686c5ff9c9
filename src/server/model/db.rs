//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate.

/// Type alias for the user database model.
///
/// # Fields (from `entity::roster_user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `username` - Directory username, unique
/// - `role` - Role label such as `Viewer` or `bot`
/// - `created_at` / `updated_at` - Audit timestamps, never exposed through the API
pub type UserModel = entity::roster_user::Model;

/// Type alias for the calendar event database model.
///
/// # Fields (from `entity::roster_event::Model`)
/// - `id` - Primary key, unique event identifier
/// - `event_type` - Category tag such as `DutyTech1` or `bank_holiday`; empty marks a null event
/// - `title` - Free-text title
/// - `start_date` / `end_date` - Naive UTC timestamps, end is optional
/// - `all_day` - Whether the event spans whole days
/// - `recurring_type` / `recurring_interval` - Recurrence tag and interval in seconds
/// - `user_id` - Owning user, if any
/// - `created_at` / `updated_at` - Audit timestamps, never exposed through the API
pub type EventModel = entity::roster_event::Model;

impl From<UserModel> for crate::model::user::UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
        }
    }
}
