// src/services/answer.rs
use tracing::error;

use super::groq::{ChatMessage, GroqClient, GroqError, Sampling};
use super::prompts::PORTFOLIO_CONTEXT;
use crate::error::AppError;

pub const ANSWER_SAMPLING: Sampling = Sampling {
    temperature: 0.7,
    max_tokens: 1024,
};

pub const EMPTY_ANSWER_FALLBACK: &str = "No response from AI";

/// Answer a question grounded in the portfolio context.
///
/// The question goes to the model exactly as received. A non-success status
/// becomes `AppError::Upstream` with the same code.
pub async fn generate_answer(
    client: &GroqClient,
    api_key: &str,
    question: &str,
) -> Result<String, AppError> {
    let messages = [
        ChatMessage::system(PORTFOLIO_CONTEXT),
        ChatMessage::user(question),
    ];

    let response = match client.complete(api_key, &messages, ANSWER_SAMPLING).await {
        Ok(response) => response,
        Err(GroqError::Status { status, body }) => {
            error!(status, body = %body, "Groq API error");
            return Err(AppError::Upstream(status));
        }
        Err(e) => return Err(e.into()),
    };

    let content = match response.first_content() {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => EMPTY_ANSWER_FALLBACK.to_string(),
    };

    Ok(content)
}
