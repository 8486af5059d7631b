use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::database::event_repo::{self, NewEventRow};
use crate::models::Event;

const IMAGE_EXTENSIONS: [&str; 5] = [".png", ".jpg", ".jpeg", ".gif", ".gifv"];

/// Raw form input for the create-event page.
#[derive(Debug, Deserialize, Default)]
pub struct EventForm {
    pub title: String,
    pub location: String,
    pub image: String,
    pub date: String,
}

/// A validated event, ready to persist.
#[derive(Debug)]
pub struct NewEvent {
    pub title: String,
    pub location: String,
    pub image: String,
    pub date: DateTime<Utc>,
}

/// Checks the form against the publication rules and returns either a
/// validated event or the accumulated error message for re-rendering.
pub fn validate_event_form(form: &EventForm, now: DateTime<Utc>) -> Result<NewEvent, String> {
    let mut errors = String::new();

    if form.title.len() < 6 || form.title.len() > 49 {
        errors.push_str("Bad Title!");
    }
    if form.location.len() < 6 || form.location.len() > 49 {
        errors.push_str(" Bad Location!");
    }
    if !is_valid_image_url(&form.image) {
        errors.push_str(" Bad URL!");
    }

    let date = parse_form_date(&form.date).filter(|date| *date > now);
    if date.is_none() {
        errors.push_str(" Bad Date!");
    }

    match date {
        Some(date) if errors.is_empty() => Ok(NewEvent {
            title: form.title.clone(),
            location: form.location.clone(),
            image: form.image.clone(),
            date,
        }),
        _ => Err(errors),
    }
}

/// Persists a validated event and returns the id the store assigned.
pub async fn create_event(pool: &SqlitePool, event: &NewEvent) -> sqlx::Result<i64> {
    event_repo::insert_event(
        pool,
        NewEventRow {
            id: None,
            title: &event.title,
            location: &event.location,
            image: &event.image,
            date: event.date,
            status: "",
        },
    )
    .await
}

/// Event snapshot with its attendee list, `None` when the id is unknown.
pub async fn load_event(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Event>> {
    let Some(row) = event_repo::load_event_by_id(pool, id).await? else {
        return Ok(None);
    };
    let attending = event_repo::list_attendee_emails(pool, row.id).await?;
    Ok(Some(Event::from_row(row, attending)))
}

/// All events in id order, each with its attendee list. Any storage failure
/// aborts the whole call; there are no partial results.
pub async fn list_events(pool: &SqlitePool) -> sqlx::Result<Vec<Event>> {
    let rows = event_repo::list_events(pool).await?;
    let mut events = Vec::with_capacity(rows.len());
    for row in rows {
        let attending = event_repo::list_attendee_emails(pool, row.id).await?;
        events.push(Event::from_row(row, attending));
    }
    Ok(events)
}

/// Form dates arrive as `YYYY-MM-DDTHH:MM` with no zone; they are interpreted
/// as UTC, the same zone everything is stored and compared in.
fn parse_form_date(input: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M")
        .ok()
        .map(|naive| naive.and_utc())
}

fn is_valid_image_url(url: &str) -> bool {
    if !IMAGE_EXTENSIONS.iter().any(|ext| url.ends_with(ext)) {
        return false;
    }
    is_valid_url(url)
}

fn is_valid_url(url: &str) -> bool {
    let rest = match url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
    {
        Some(rest) => rest,
        None => return false,
    };
    let host = rest.split('/').next().unwrap_or("");
    !host.is_empty()
}
