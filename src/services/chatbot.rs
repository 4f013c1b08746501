// src/services/chatbot.rs
use tracing::info;

use super::answer::generate_answer;
use super::prompts::POLITE_DECLINE_MESSAGE;
use super::relevance::is_relevant;
use crate::error::AppError;
use crate::state::AppState;

/// Classify, then answer or decline.
pub async fn generate_reply(state: &AppState, message: &str) -> Result<String, AppError> {
    // Checked before any outbound call.
    let api_key = state.config.api_key.as_deref().ok_or(AppError::MissingApiKey)?;

    if !is_relevant(&state.groq, api_key, message).await {
        info!("question judged off topic, declining");
        return Ok(POLITE_DECLINE_MESSAGE.to_string());
    }

    generate_answer(&state.groq, api_key, message).await
}
