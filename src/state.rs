// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::groq::GroqClient;

pub type SharedState = Arc<AppState>;

// Read-only after start-up; shared by every request.
pub struct AppState {
    pub config: Config,
    pub groq: GroqClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let groq = GroqClient::from_config(&config);
        Self { config, groq }
    }
}
