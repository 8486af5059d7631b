use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::Event;
use crate::services::event_service;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub events: Vec<Event>,
    pub today: DateTime<Utc>,
}

pub async fn index_handler(State(pool): State<SqlitePool>) -> impl IntoResponse {
    let events = match event_service::list_events(&pool).await {
        Ok(events) => events,
        Err(e) => return AppError::Store(e).into_response(),
    };

    let template = IndexTemplate {
        events,
        today: Utc::now(),
    };
    Html(template.render().unwrap()).into_response()
}
