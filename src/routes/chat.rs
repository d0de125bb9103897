use axum::{Json, body::Bytes, extract::State};

use crate::{
    error::RelayError,
    message::{ChatAnswer, ChatRequest},
    services::relay::relay_message,
    state::SharedState,
};

// The body is parsed here rather than by the `Json` extractor so that a bad
// body fails the same way as every other relay error.
pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ChatAnswer>, RelayError> {
    let payload: ChatRequest = serde_json::from_slice(&body)?;

    let answer = relay_message(state.agent.as_ref(), &state.settings, payload.into_message()).await?;

    Ok(Json(ChatAnswer { answer }))
}
