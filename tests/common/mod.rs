#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use eventboard::database::schema;
use eventboard::services::event_service::NewEvent;

/// One-connection in-memory pool: every task shares the same database and
/// writes serialize through the single connection.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    schema::ensure_schema(&pool).await.expect("schema");
    pool
}

pub fn future_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 1, 1, 10, 0, 0).unwrap()
}

pub fn sample_event(title: &str) -> NewEvent {
    NewEvent {
        title: title.to_string(),
        location: "Somewhere Hall".to_string(),
        image: "http://example.com/poster.png".to_string(),
        date: future_date(),
    }
}
