use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Error taxonomy for the web layer. `NotFound` is an expected negative
/// result, `Validation` is a caller input problem, `Store` is a persistence
/// fault whose details stay in the log. Schema failures are handled at
/// startup and never reach this type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("storage error")]
    Store(#[from] sqlx::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            AppError::NotFound => "Event not found".to_string(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Store(e) => {
                error!(error = ?e, "Storage error");
                "A storage error occurred".to_string()
            }
        };
        (status, body).into_response()
    }
}
