pub use super::roster_event::Entity as RosterEvent;
pub use super::roster_user::Entity as RosterUser;
