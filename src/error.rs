// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;
use crate::services::groq::GroqError;

pub const MISSING_API_KEY_MESSAGE: &str =
    "Groq API key is not configured. Please set GROQ_API_KEY in your environment variables.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{}", MISSING_API_KEY_MESSAGE)]
    MissingApiKey,

    /// Non-success status from the answer call, mirrored back to the caller.
    #[error("Groq API error: {0}")]
    Upstream(u16),

    #[error("{}", internal_text(.0))]
    Internal(String),
}

fn internal_text(message: &str) -> &str {
    if message.is_empty() {
        "Internal server error"
    } else {
        message
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MissingApiKey | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream(code) => {
                StatusCode::from_u16(*code).unwrap_or(StatusCode::BAD_GATEWAY)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<GroqError> for AppError {
    fn from(e: GroqError) -> Self {
        match e {
            GroqError::Status { status, .. } => AppError::Upstream(status),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}
