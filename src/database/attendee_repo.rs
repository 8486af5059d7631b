use sqlx::SqlitePool;

// The no-op update makes RETURNING yield the existing id on conflict, so the
// UNIQUE constraint on email is the only thing deciding create-vs-find even
// when two RSVPs for a brand-new address race.
const SQL_RESOLVE_OR_CREATE: &str = r#"
INSERT INTO attendees (email)
VALUES (?)
ON CONFLICT (email) DO UPDATE SET email = excluded.email
RETURNING id
"#;

const SQL_EVENT_EXISTS: &str = "SELECT COUNT(*) FROM events WHERE id = ?";

const SQL_INSERT_LINK: &str = r#"
INSERT OR IGNORE INTO event_attendees (event_id, attendee_id)
VALUES (?, ?)
"#;

/// Looks an attendee up by exact email, creating the row on first contact.
/// The same address always resolves to the same id.
pub async fn resolve_or_create(pool: &SqlitePool, email: &str) -> sqlx::Result<i64> {
    sqlx::query_scalar(SQL_RESOLVE_OR_CREATE)
        .bind(email)
        .fetch_one(pool)
        .await
}

/// Links an attendee to an event. A pre-existing link is accepted silently.
/// Returns `false` when the event id does not exist; callers translate that
/// to their own not-found result.
pub async fn link(pool: &SqlitePool, event_id: i64, attendee_id: i64) -> sqlx::Result<bool> {
    let exists: i64 = sqlx::query_scalar(SQL_EVENT_EXISTS)
        .bind(event_id)
        .fetch_one(pool)
        .await?;
    if exists == 0 {
        return Ok(false);
    }

    sqlx::query(SQL_INSERT_LINK)
        .bind(event_id)
        .bind(attendee_id)
        .execute(pool)
        .await?;
    Ok(true)
}
