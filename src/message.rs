// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

pub const INVALID_MESSAGE: &str = "Message is required and must be a string";
const NULL_BODY: &str = "Cannot read property 'message' of a null request body";

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    /// Decode a raw request body.
    ///
    /// Undecodable JSON and a bare `null` are internal errors; a missing,
    /// empty or non-string `message` is a bad request.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        let value: Value = serde_json::from_slice(body)?;
        if value.is_null() {
            return Err(AppError::Internal(NULL_BODY.to_string()));
        }

        match value.get("message") {
            Some(Value::String(message)) if !message.is_empty() => Ok(Self {
                message: message.clone(),
            }),
            _ => Err(AppError::BadRequest(INVALID_MESSAGE.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
