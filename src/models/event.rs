use chrono::{DateTime, Utc};
use serde::Serialize;

/// Row shape of the `events` table. `status` is a free-text field kept on the
/// row but never exposed through the JSON mirror.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EventRow {
    pub id: i64,
    pub title: String,
    pub location: String,
    pub image: String,
    pub date: DateTime<Utc>,
    pub status: String,
}

/// Snapshot handed to the web and JSON layers. A value copy: mutating it does
/// not touch persisted state.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub location: String,
    pub image: String,
    pub date: DateTime<Utc>,
    pub attending: Vec<String>,
}

impl Event {
    pub fn from_row(row: EventRow, attending: Vec<String>) -> Self {
        Self {
            id: row.id,
            title: row.title,
            location: row.location,
            image: row.image,
            date: row.date,
            attending,
        }
    }
}
