use chrono::{DateTime, TimeZone, Utc};
use sqlx::SqlitePool;

use crate::database::attendee_repo;
use crate::database::event_repo::{self, NewEventRow};

const SQL_CREATE_EVENTS: &str = r#"
CREATE TABLE IF NOT EXISTS events (
  id INTEGER PRIMARY KEY,
  title TEXT NOT NULL,
  location TEXT NOT NULL DEFAULT '',
  image TEXT NOT NULL DEFAULT '',
  date TEXT NOT NULL,
  status TEXT NOT NULL DEFAULT ''
)
"#;

const SQL_CREATE_ATTENDEES: &str = r#"
CREATE TABLE IF NOT EXISTS attendees (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  email TEXT NOT NULL UNIQUE
)
"#;

const SQL_CREATE_EVENT_ATTENDEES: &str = r#"
CREATE TABLE IF NOT EXISTS event_attendees (
  event_id INTEGER NOT NULL,
  attendee_id INTEGER NOT NULL,
  PRIMARY KEY (event_id, attendee_id),
  FOREIGN KEY (event_id) REFERENCES events (id) ON DELETE CASCADE,
  FOREIGN KEY (attendee_id) REFERENCES attendees (id) ON DELETE CASCADE
)
"#;

const SQL_COUNT_EVENTS: &str = "SELECT COUNT(*) FROM events";

/// Creates the three tables if they are absent. Safe to call on every start.
pub async fn ensure_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(SQL_CREATE_EVENTS).execute(pool).await?;
    sqlx::query(SQL_CREATE_ATTENDEES).execute(pool).await?;
    sqlx::query(SQL_CREATE_EVENT_ATTENDEES).execute(pool).await?;
    Ok(())
}

struct SeedEvent {
    id: i64,
    title: &'static str,
    location: &'static str,
    image: &'static str,
    date: DateTime<Utc>,
    attending: &'static [&'static str],
}

// Dates are stored in UTC; these are the original New-York local times
// converted. There is deliberately no event 4, so lookups for it exercise
// the not-found path.
fn default_events() -> Vec<SeedEvent> {
    vec![
        SeedEvent {
            id: 1,
            title: "SOM House Party",
            location: "Kyle's house",
            image: "http://i.imgur.com/pXjrQ.gif",
            date: Utc.with_ymd_and_hms(2026, 10, 17, 20, 30, 0).unwrap(),
            attending: &["kyle.jensen@yale.edu", "kim.kardashian@yale.edu"],
        },
        SeedEvent {
            id: 2,
            title: "BBQ party for hackers and nerds",
            location: "Judy Chevalier's house",
            image: "http://i.imgur.com/7pe2k.gif",
            date: Utc.with_ymd_and_hms(2026, 10, 19, 23, 0, 0).unwrap(),
            attending: &["kyle.jensen@yale.edu", "kim.kardashian@yale.edu"],
        },
        SeedEvent {
            id: 3,
            title: "BBQ for managers",
            location: "Barry Nalebuff's house",
            image: "http://i.imgur.com/CJLrRqh.gif",
            date: Utc.with_ymd_and_hms(2026, 12, 2, 23, 0, 0).unwrap(),
            attending: &["kim.kardashian@yale.edu"],
        },
        SeedEvent {
            id: 5,
            title: "Cooking lessons for the busy business student",
            location: "Yale Farm",
            image: "http://i.imgur.com/02KT9.gif",
            date: Utc.with_ymd_and_hms(2026, 12, 22, 0, 0, 0).unwrap(),
            attending: &["homer.simpson@yale.edu"],
        },
    ]
}

/// Inserts the example events with their attendees, but only when the events
/// table is empty, so a restart never seeds twice.
pub async fn seed_if_empty(pool: &SqlitePool) -> sqlx::Result<()> {
    let count: i64 = sqlx::query_scalar(SQL_COUNT_EVENTS).fetch_one(pool).await?;
    if count > 0 {
        return Ok(());
    }

    for seed in default_events() {
        let event_id = event_repo::insert_event(
            pool,
            NewEventRow {
                id: Some(seed.id),
                title: seed.title,
                location: seed.location,
                image: seed.image,
                date: seed.date,
                status: "",
            },
        )
        .await?;

        for email in seed.attending {
            let attendee_id = attendee_repo::resolve_or_create(pool, email).await?;
            attendee_repo::link(pool, event_id, attendee_id).await?;
        }
    }
    Ok(())
}
