use sqlx::SqlitePool;

use crate::database::{attendee_repo, event_repo};
use crate::models::Event;
use crate::services::digest;

/// Institutional suffix an address must carry to be admitted. Exact,
/// case-sensitive match.
pub const REQUIRED_EMAIL_SUFFIX: &str = "@yale.edu";

pub const ADMITTED_MESSAGE: &str = "Thank You for your RSVP!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsvpRejection {
    InvalidEmail,
    DomainRestricted,
    AlreadyRegistered,
}

impl RsvpRejection {
    pub fn message(self) -> &'static str {
        match self {
            RsvpRejection::InvalidEmail => {
                "Invalid email format. Please enter a valid email address."
            }
            RsvpRejection::DomainRestricted => "Bad email. Yalies only",
            RsvpRejection::AlreadyRegistered => "Email is already RSVP-ed",
        }
    }
}

#[derive(Debug)]
pub enum RsvpOutcome {
    Admitted { event: Event, digest: String },
    Rejected { event: Event, reason: RsvpRejection },
}

/// Runs the admission rules for one RSVP attempt. `Ok(None)` means the event
/// id does not resolve. A rejected attempt leaves the store untouched; an
/// admitted one persists the attendance link and appends the email to the
/// returned snapshot.
pub async fn apply_rsvp(
    pool: &SqlitePool,
    event_id: i64,
    email: &str,
) -> sqlx::Result<Option<RsvpOutcome>> {
    let Some(row) = event_repo::load_event_by_id(pool, event_id).await? else {
        return Ok(None);
    };
    let attending = event_repo::list_attendee_emails(pool, event_id).await?;
    let mut event = Event::from_row(row, attending);

    if let Some(reason) = first_rejection(email, &event.attending) {
        return Ok(Some(RsvpOutcome::Rejected { event, reason }));
    }

    let attendee_id = attendee_repo::resolve_or_create(pool, email).await?;
    if !attendee_repo::link(pool, event_id, attendee_id).await? {
        return Ok(None);
    }

    let digest = digest::email_digest(email);
    event.attending.push(email.to_string());

    Ok(Some(RsvpOutcome::Admitted { event, digest }))
}

/// Only the first failing rule is surfaced: syntax, then domain, then
/// duplicates.
fn first_rejection(email: &str, attending: &[String]) -> Option<RsvpRejection> {
    if !is_valid_email(email) {
        return Some(RsvpRejection::InvalidEmail);
    }
    if !email.ends_with(REQUIRED_EMAIL_SUFFIX) {
        return Some(RsvpRejection::DomainRestricted);
    }
    if attending.iter().any(|registered| registered == email) {
        return Some(RsvpRejection::AlreadyRegistered);
    }
    None
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("kyle@yale.edu"));
        assert!(is_valid_email("first.last@mail.example.com"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@yale.edu"));
        assert!(!is_valid_email("kyle@"));
        assert!(!is_valid_email("kyle@yale"));
        assert!(!is_valid_email("kyle smith@yale.edu"));
    }

    #[test]
    fn syntax_beats_domain_beats_duplicates() {
        let attending = vec!["dup@yale.edu".to_string()];
        assert_eq!(
            first_rejection("not-an-email", &attending),
            Some(RsvpRejection::InvalidEmail)
        );
        assert_eq!(
            first_rejection("dup@gmail.com", &attending),
            Some(RsvpRejection::DomainRestricted)
        );
        assert_eq!(
            first_rejection("dup@yale.edu", &attending),
            Some(RsvpRejection::AlreadyRegistered)
        );
        assert_eq!(first_rejection("new@yale.edu", &attending), None);
    }

    #[test]
    fn suffix_match_is_case_sensitive() {
        let attending: Vec<String> = vec![];
        assert_eq!(
            first_rejection("kyle@Yale.edu", &attending),
            Some(RsvpRejection::DomainRestricted)
        );
    }
}
