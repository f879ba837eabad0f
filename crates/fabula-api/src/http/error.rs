//! Application error type mapping to HTTP status codes and the error body.
//!
//! Every failure renders as `{"error": "<message>", "success": false}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use fabula_types::error::{SessionError, StoryError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Chat session errors.
    Session(SessionError),
    /// Story catalog errors.
    Story(StoryError),
    /// Malformed request (bad JSON or query string, unknown filter value).
    Validation(String),
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        AppError::Session(e)
    }
}

impl From<StoryError> for AppError {
    fn from(e: StoryError) -> Self {
        AppError::Story(e)
    }
}

impl AppError {
    /// Status code and client-facing message.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Session(SessionError::NotFound) => {
                (StatusCode::NOT_FOUND, "Session not found".to_string())
            }
            AppError::Session(SessionError::EmptyMessage) => {
                (StatusCode::BAD_REQUEST, "Message cannot be empty".to_string())
            }
            AppError::Session(SessionError::Generation(e)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::Story(StoryError::NotFound) => {
                (StatusCode::NOT_FOUND, "Story not found".to_string())
            }
            AppError::Story(StoryError::MissingField(field)) => {
                (StatusCode::BAD_REQUEST, format!("Field {field} is required"))
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), error = %message, "request failed");
        }

        let body = json!({
            "error": message,
            "success": false,
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
