use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect};
use axum::Form;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::services::event_service::{self, EventForm};

#[derive(Template)]
#[template(path = "new_event.html")]
pub struct NewEventTemplate {
    pub error_message: String,
    pub form: EventForm,
}

pub async fn new_event_page() -> Html<String> {
    let template = NewEventTemplate {
        error_message: String::new(),
        form: EventForm::default(),
    };
    Html(template.render().unwrap())
}

pub async fn create_event_handler(
    State(pool): State<SqlitePool>,
    Form(form): Form<EventForm>,
) -> impl IntoResponse {
    let new_event = match event_service::validate_event_form(&form, Utc::now()) {
        Ok(new_event) => new_event,
        Err(error_message) => {
            let template = NewEventTemplate {
                error_message,
                form,
            };
            return Html(template.render().unwrap()).into_response();
        }
    };

    match event_service::create_event(&pool, &new_event).await {
        Ok(id) => Redirect::to(&format!("/events/{}", id)).into_response(),
        Err(e) => AppError::Store(e).into_response(),
    }
}
