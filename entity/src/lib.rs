pub mod prelude;

pub mod roster_event;
pub mod roster_user;
