pub mod api;
pub mod event;
pub mod events;
pub mod new_event;
pub mod pages;
