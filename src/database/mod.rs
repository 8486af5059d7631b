pub mod attendee_repo;
pub mod event_repo;
pub mod schema;
