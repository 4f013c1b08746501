// src/config.rs
use std::env;

pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Process-wide settings, built once at start-up.
#[derive(Clone)]
pub struct Config {
    /// `None` when `GROQ_API_KEY` is unset or blank. Checked per request.
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub bind_addr: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl Config {
    // Read settings from the environment. Call after dotenvy has loaded `.env`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            api_key: non_empty("GROQ_API_KEY"),
            api_url: non_empty("GROQ_API_URL").unwrap_or(defaults.api_url),
            model: non_empty("GROQ_MODEL").unwrap_or(defaults.model),
            bind_addr: non_empty("BIND_ADDR").unwrap_or(defaults.bind_addr),
        }
    }
}
