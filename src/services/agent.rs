// src/services/agent.rs
use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::{config::AgentSettings, error::RelayError};

/// One piece of what the agent streams back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionEvent {
    /// A payload part carrying answer bytes.
    Chunk(Vec<u8>),
    /// Anything else (traces, control returns, empty payload parts).
    Other,
}

/// The agent's answer as it arrives. Finite, consumed once.
pub type CompletionStream = BoxStream<'static, Result<CompletionEvent, RelayError>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokeRequest {
    pub agent_id: String,
    pub agent_alias_id: String,
    pub session_id: String,
    pub input_text: String,
}

impl InvokeRequest {
    pub fn new(
        settings: &AgentSettings,
        session_id: impl Into<String>,
        input_text: impl Into<String>,
    ) -> Result<Self, RelayError> {
        let agent_id = settings
            .agent_id
            .clone()
            .ok_or(RelayError::MissingConfig("BEDROCK_AGENT_ID"))?;
        let agent_alias_id = settings
            .agent_alias_id
            .clone()
            .ok_or(RelayError::MissingConfig("BEDROCK_AGENT_ALIAS_ID"))?;

        Ok(Self {
            agent_id,
            agent_alias_id,
            session_id: session_id.into(),
            input_text: input_text.into(),
        })
    }
}

/// A conversational agent that can be sent a single message.
///
/// `Ok(None)` means the service answered without a completion stream.
#[async_trait]
pub trait AgentRuntime: Send + Sync {
    async fn invoke(&self, request: InvokeRequest) -> Result<Option<CompletionStream>, RelayError>;
}
