mod common;

use eventboard::services::event_service;
use eventboard::services::rsvp_service::{self, RsvpOutcome, RsvpRejection};
use sqlx::SqlitePool;

use common::{memory_pool, sample_event};

async fn event_with_attendee(pool: &SqlitePool, email: &str) -> i64 {
    let event_id = event_service::create_event(pool, &sample_event("Fixture event"))
        .await
        .expect("create");
    match rsvp_service::apply_rsvp(pool, event_id, email)
        .await
        .expect("rsvp")
        .expect("event exists")
    {
        RsvpOutcome::Admitted { .. } => event_id,
        RsvpOutcome::Rejected { reason, .. } => panic!("fixture rejected: {:?}", reason),
    }
}

fn rejection_of(outcome: Option<RsvpOutcome>) -> RsvpRejection {
    match outcome.expect("event exists") {
        RsvpOutcome::Rejected { reason, .. } => reason,
        RsvpOutcome::Admitted { .. } => panic!("expected a rejection"),
    }
}

#[tokio::test]
async fn unknown_event_resolves_to_none() {
    let pool = memory_pool().await;
    let outcome = rsvp_service::apply_rsvp(&pool, 42, "kyle@yale.edu")
        .await
        .expect("rsvp");
    assert!(outcome.is_none());
}

#[tokio::test]
async fn rejection_precedence_follows_the_rule_order() {
    let pool = memory_pool().await;
    let event_id = event_with_attendee(&pool, "dup@yale.edu").await;

    // The duplicate address would also trip later rules; only the first
    // failing rule is surfaced.
    let reason = rejection_of(
        rsvp_service::apply_rsvp(&pool, event_id, "not-an-email")
            .await
            .expect("rsvp"),
    );
    assert_eq!(reason, RsvpRejection::InvalidEmail);

    let reason = rejection_of(
        rsvp_service::apply_rsvp(&pool, event_id, "dup@gmail.com")
            .await
            .expect("rsvp"),
    );
    assert_eq!(reason, RsvpRejection::DomainRestricted);

    let reason = rejection_of(
        rsvp_service::apply_rsvp(&pool, event_id, "dup@yale.edu")
            .await
            .expect("rsvp"),
    );
    assert_eq!(reason, RsvpRejection::AlreadyRegistered);
}

#[tokio::test]
async fn admission_persists_the_link_and_returns_a_digest() {
    let pool = memory_pool().await;
    let event_id = event_service::create_event(&pool, &sample_event("Open event"))
        .await
        .expect("create");

    let outcome = rsvp_service::apply_rsvp(&pool, event_id, "kyle@yale.edu")
        .await
        .expect("rsvp")
        .expect("event exists");

    let RsvpOutcome::Admitted { event, digest } = outcome else {
        panic!("expected admission");
    };
    assert_eq!(event.attending, vec!["kyle@yale.edu"]);
    assert_eq!(digest.len(), 7);
    assert!(digest
        .chars()
        .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

    // Second attempt bounces and the persisted list stays at one entry.
    let reason = rejection_of(
        rsvp_service::apply_rsvp(&pool, event_id, "kyle@yale.edu")
            .await
            .expect("rsvp"),
    );
    assert_eq!(reason, RsvpRejection::AlreadyRegistered);

    let event = event_service::load_event(&pool, event_id)
        .await
        .expect("load")
        .expect("found");
    assert_eq!(event.attending, vec!["kyle@yale.edu"]);
}

#[tokio::test]
async fn a_rejected_attempt_writes_nothing() {
    let pool = memory_pool().await;
    let event_id = event_service::create_event(&pool, &sample_event("Restricted event"))
        .await
        .expect("create");

    let reason = rejection_of(
        rsvp_service::apply_rsvp(&pool, event_id, "outsider@gmail.com")
            .await
            .expect("rsvp"),
    );
    assert_eq!(reason, RsvpRejection::DomainRestricted);

    let attendees: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM attendees")
        .fetch_one(&pool)
        .await
        .expect("count");
    assert_eq!(attendees, 0);
}

#[tokio::test]
async fn admission_digest_is_stable_across_events() {
    let pool = memory_pool().await;
    let first = event_service::create_event(&pool, &sample_event("First event"))
        .await
        .expect("create");
    let second = event_service::create_event(&pool, &sample_event("Second event"))
        .await
        .expect("create");

    let digest_for = |outcome: Option<RsvpOutcome>| match outcome.expect("event exists") {
        RsvpOutcome::Admitted { digest, .. } => digest,
        RsvpOutcome::Rejected { reason, .. } => panic!("rejected: {:?}", reason),
    };

    let a = digest_for(
        rsvp_service::apply_rsvp(&pool, first, "x@yale.edu")
            .await
            .expect("rsvp"),
    );
    let b = digest_for(
        rsvp_service::apply_rsvp(&pool, second, "x@yale.edu")
            .await
            .expect("rsvp"),
    );
    assert_eq!(a, b);
}
