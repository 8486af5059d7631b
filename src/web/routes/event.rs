use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse};
use axum::Form;
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::Event;
use crate::services::event_service;
use crate::services::rsvp_service::{self, RsvpOutcome};

#[derive(Template)]
#[template(path = "event.html")]
pub struct EventTemplate {
    pub event: Event,
    pub rsvp_message: String,
    pub rsvp_class: String,
    pub digest: String,
}

impl EventTemplate {
    fn plain(event: Event) -> Self {
        Self {
            event,
            rsvp_message: String::new(),
            rsvp_class: String::new(),
            digest: String::new(),
        }
    }
}

pub async fn event_detail_handler(
    Path(event_id): Path<i64>,
    State(pool): State<SqlitePool>,
) -> impl IntoResponse {
    match event_service::load_event(&pool, event_id).await {
        Ok(Some(event)) => {
            let template = EventTemplate::plain(event);
            Html(template.render().unwrap()).into_response()
        }
        Ok(None) => AppError::NotFound.into_response(),
        Err(e) => AppError::Store(e).into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub struct RsvpForm {
    pub email: String,
}

pub async fn rsvp_handler(
    Path(event_id): Path<i64>,
    State(pool): State<SqlitePool>,
    Form(form): Form<RsvpForm>,
) -> impl IntoResponse {
    let outcome = match rsvp_service::apply_rsvp(&pool, event_id, &form.email).await {
        Ok(Some(outcome)) => outcome,
        Ok(None) => return AppError::NotFound.into_response(),
        Err(e) => return AppError::Store(e).into_response(),
    };

    let template = match outcome {
        RsvpOutcome::Admitted { event, digest } => EventTemplate {
            event,
            rsvp_message: rsvp_service::ADMITTED_MESSAGE.to_string(),
            rsvp_class: "success".to_string(),
            digest,
        },
        RsvpOutcome::Rejected { event, reason } => EventTemplate {
            event,
            rsvp_message: reason.message().to_string(),
            rsvp_class: "error".to_string(),
            digest: String::new(),
        },
    };
    Html(template.render().unwrap()).into_response()
}

#[derive(Template)]
#[template(path = "donate.html")]
pub struct DonateTemplate;

pub async fn donate_handler(Path(_event_id): Path<i64>) -> Html<String> {
    Html(DonateTemplate.render().unwrap())
}
