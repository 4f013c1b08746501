// src/services/groq.rs
//
// Thin client for Groq's OpenAI-compatible chat-completions endpoint.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum GroqError {
    #[error("request to Groq failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Groq API error: {status}")]
    Status { status: u16, body: String },

    #[error("invalid response from Groq: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

/// Sampling settings for one call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampling {
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

// Every level is optional so a partial body still decodes.
#[derive(Debug, Default, Deserialize)]
pub struct CompletionResponse {
    // `null` is accepted at every level, including inside the array.
    #[serde(default)]
    pub choices: Option<Vec<Option<Choice>>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionResponse {
    /// `choices[0].message.content`, if present.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .as_ref()?
            .first()?
            .as_ref()?
            .message
            .as_ref()?
            .content
            .as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct GroqClient {
    http: reqwest::Client,
    api_url: String,
    model: String,
}

impl GroqClient {
    pub fn new(api_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
            model: model.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_url.clone(), config.model.clone())
    }

    /// Send one chat-completion request. No retries.
    pub async fn complete(
        &self,
        api_key: &str,
        messages: &[ChatMessage],
        sampling: Sampling,
    ) -> Result<CompletionResponse, GroqError> {
        let body = CompletionRequest {
            model: &self.model,
            messages,
            temperature: sampling.temperature,
            max_tokens: sampling.max_tokens,
        };

        debug!(
            model = %self.model,
            messages = messages.len(),
            temperature = sampling.temperature,
            max_tokens = sampling.max_tokens,
            "calling Groq"
        );

        let response = self
            .http
            .post(&self.api_url)
            // `.json()` sets `Content-Type: application/json`
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(GroqError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GroqError::Status { status: status.as_u16(), body });
        }

        response
            .json::<CompletionResponse>()
            .await
            .map_err(GroqError::Decode)
    }
}
