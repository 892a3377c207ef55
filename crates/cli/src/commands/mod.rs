pub mod event;
pub mod events;
pub mod message;
pub mod time;
