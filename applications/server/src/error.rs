/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::RosterError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

pub const ACCESS_DENIED_MESSAGE: &str = "Access denied. Valid Authorization header required.";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Authorization failed: {0}")]
    Unauthorized(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<RosterError> for ServerError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::DuplicateKey(_) => ServerError::BadRequest(err.to_string()),
            RosterError::NotFound(_) => ServerError::NotFound("User not found".to_string()),
            RosterError::Storage(msg) | RosterError::Database(msg) => ServerError::Database(msg),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::Unauthorized(msg) => (StatusCode::FORBIDDEN, msg),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::Validation(messages) => {
                let body = Json(json!({
                    "error": messages.join(", "),
                    "messages": messages,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            ServerError::Database(ref msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
