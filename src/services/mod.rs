pub mod digest;
pub mod event_service;
pub mod rsvp_service;
