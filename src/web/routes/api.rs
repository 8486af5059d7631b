use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::services::event_service;

/// Read-only JSON mirror of the event list.
pub async fn list_events_api(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let events = event_service::list_events(&pool).await?;
    Ok(Json(json!({ "events": events })))
}

pub async fn event_api(
    Path(event_id): Path<i64>,
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let event = event_service::load_event(&pool, event_id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(event))
}
