use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::models::EventRow;

// The id subquery runs inside the INSERT itself, so SQLite's write lock
// serializes concurrent creations and two writers can never pick the same id.
const SQL_INSERT_EVENT: &str = r#"
INSERT INTO events (id, title, location, image, date, status)
VALUES (
  COALESCE(?, (SELECT COALESCE(MAX(id), 0) + 1 FROM events)),
  ?, ?, ?, ?, ?
)
RETURNING id
"#;

const SQL_LOAD_EVENT_BY_ID: &str = r#"
SELECT id, title, location, image, date, status
FROM events
WHERE id = ?
LIMIT 1
"#;

const SQL_LIST_EVENTS: &str = r#"
SELECT id, title, location, image, date, status
FROM events
ORDER BY id ASC
"#;

const SQL_LIST_ATTENDEE_EMAILS: &str = r#"
SELECT a.email
FROM attendees a
INNER JOIN event_attendees ea ON ea.attendee_id = a.id
WHERE ea.event_id = ?
ORDER BY ea.rowid ASC
"#;

const SQL_MAX_EVENT_ID: &str = "SELECT MAX(id) FROM events";

pub struct NewEventRow<'a> {
    /// `None` lets the store assign `max(id) + 1`; seeding passes a fixed id.
    pub id: Option<i64>,
    pub title: &'a str,
    pub location: &'a str,
    pub image: &'a str,
    pub date: DateTime<Utc>,
    pub status: &'a str,
}

/// Persists the event and returns the assigned id.
pub async fn insert_event(pool: &SqlitePool, row: NewEventRow<'_>) -> sqlx::Result<i64> {
    sqlx::query_scalar(SQL_INSERT_EVENT)
        .bind(row.id)
        .bind(row.title)
        .bind(row.location)
        .bind(row.image)
        .bind(row.date)
        .bind(row.status)
        .fetch_one(pool)
        .await
}

/// `None` when no row matches; storage failures surface as `Err`.
pub async fn load_event_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<EventRow>> {
    sqlx::query_as::<_, EventRow>(SQL_LOAD_EVENT_BY_ID)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_events(pool: &SqlitePool) -> sqlx::Result<Vec<EventRow>> {
    sqlx::query_as::<_, EventRow>(SQL_LIST_EVENTS)
        .fetch_all(pool)
        .await
}

/// Attendee emails for one event, in the order they were linked.
pub async fn list_attendee_emails(pool: &SqlitePool, event_id: i64) -> sqlx::Result<Vec<String>> {
    sqlx::query_scalar(SQL_LIST_ATTENDEE_EMAILS)
        .bind(event_id)
        .fetch_all(pool)
        .await
}

/// Highest assigned event id, `None` while the table is empty.
pub async fn max_event_id(pool: &SqlitePool) -> sqlx::Result<Option<i64>> {
    sqlx::query_scalar(SQL_MAX_EVENT_ID).fetch_one(pool).await
}
