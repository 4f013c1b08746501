// src/services/relevance.rs
use tracing::{debug, warn};

use super::groq::{ChatMessage, GroqClient, Sampling};
use super::prompts::relevance_prompt;

/// Near-deterministic, one word expected back.
pub const CLASSIFIER_SAMPLING: Sampling = Sampling {
    temperature: 0.1,
    max_tokens: 10,
};

/// Ask the model whether `question` is about the portfolio.
///
/// Fails open: a transport error, a non-success status, an undecodable body
/// or a reply without content all count as relevant. Only a real reply other
/// than `YES` turns the question away.
pub async fn is_relevant(client: &GroqClient, api_key: &str, question: &str) -> bool {
    let messages = [ChatMessage::system(relevance_prompt(question))];

    match client.complete(api_key, &messages, CLASSIFIER_SAMPLING).await {
        Ok(response) => match response.first_content() {
            Some(reply) => {
                let verdict = parse_verdict(reply);
                debug!(reply, verdict, "relevance verdict");
                verdict
            }
            None => {
                warn!("relevance check returned no content, allowing question");
                true
            }
        },
        Err(e) => {
            warn!(error = %e, "relevance check failed, allowing question");
            true
        }
    }
}

pub fn parse_verdict(reply: &str) -> bool {
    reply.trim().to_uppercase() == "YES"
}
