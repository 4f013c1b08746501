use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};
use tracing::{debug, error, info};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::chatbot::generate_reply,
    state::SharedState,
};

// The body is taken raw so bad JSON and a bad `message` field can be
// answered differently. A body axum cannot buffer (over the size limit,
// broken stream) still gets a JSON error.
pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let body = body
        .map_err(|rejection| AppError::Internal(rejection.body_text()))
        .inspect_err(log_failure)?;

    let payload = ChatRequest::from_body(&body).inspect_err(log_failure)?;
    info!(chars = payload.message.chars().count(), "chat request");

    let content = generate_reply(&state, &payload.message)
        .await
        .inspect_err(log_failure)?;

    Ok(Json(ChatResponse { content }))
}

fn log_failure(e: &AppError) {
    match e {
        AppError::BadRequest(_) => debug!(error = %e, "rejected chat request"),
        // answer step already logged the upstream body
        AppError::Upstream(_) => {}
        AppError::MissingApiKey | AppError::Internal(_) => error!(error = %e, "chat request failed"),
    }
}
