pub mod answer;
pub mod chatbot;
pub mod groq;
pub mod prompts;
pub mod relevance;
