// src/services/relay.rs
use futures::{Stream, StreamExt};
use tracing::debug;
use uuid::Uuid;

use super::agent::{AgentRuntime, CompletionEvent, InvokeRequest};
use crate::{config::AgentSettings, error::RelayError};

/// Send one message to the agent under a fresh session and wait for the
/// whole answer.
pub async fn relay_message(
    agent: &dyn AgentRuntime,
    settings: &AgentSettings,
    message: String,
) -> Result<String, RelayError> {
    let session_id = Uuid::new_v4().to_string();
    let request = InvokeRequest::new(settings, session_id.as_str(), message)?;

    debug!(%session_id, "invoking agent");
    let Some(completion) = agent.invoke(request).await? else {
        debug!(%session_id, "agent returned no completion stream");
        return Ok(String::new());
    };

    let answer = collect_completion(completion).await?;
    debug!(%session_id, answer_len = answer.len(), "agent completion finished");
    Ok(answer)
}

/// Concatenate the decoded chunks in arrival order.
///
/// Each chunk is decoded on its own; invalid UTF-8 becomes U+FFFD.
/// The first stream error stops accumulation.
pub async fn collect_completion<S>(completion: S) -> Result<String, RelayError>
where
    S: Stream<Item = Result<CompletionEvent, RelayError>>,
{
    let mut completion = std::pin::pin!(completion);
    let mut answer = String::new();
    let mut chunks = 0usize;

    while let Some(event) = completion.next().await {
        if let CompletionEvent::Chunk(bytes) = event? {
            answer.push_str(&String::from_utf8_lossy(&bytes));
            chunks += 1;
        }
    }

    debug!(chunks, "completion stream drained");
    Ok(answer)
}
