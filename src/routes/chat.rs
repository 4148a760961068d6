// src/routes/chat.rs
use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::prompt::render_prompt,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    tracing::info!(
        person = payload.person.as_deref().unwrap_or("None"),
        message = payload.message.as_deref().unwrap_or("None"),
        "incoming message"
    );

    let prompt = render_prompt(
        payload.message.as_deref(),
        payload.message_history.as_deref(),
        payload.person.as_deref(),
    );
    tracing::debug!(%prompt, "rendered prompt");

    let response = state
        .completion
        .complete(&prompt, &state.config.model_name, state.config.temperature)
        .await?;
    tracing::info!(%response, "completion reply");

    Ok(Json(ChatResponse { response }))
}
