// src/services/bedrock.rs
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_bedrockagentruntime::{
    Client, config::Region, error::DisplayErrorContext, types::ResponseStream,
};
use futures::stream;
use tracing::info;

use super::agent::{AgentRuntime, CompletionEvent, CompletionStream, InvokeRequest};
use crate::error::RelayError;

/// Bedrock Agents runtime client, built once at startup and shared.
#[derive(Debug, Clone)]
pub struct BedrockAgent {
    client: Client,
}

impl BedrockAgent {
    /// Credentials come from the default AWS provider chain.
    pub async fn from_region(region: impl Into<String>) -> Self {
        let region = region.into();
        info!(%region, "configuring Bedrock agent runtime client");
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region))
            .load()
            .await;
        Self {
            client: Client::new(&sdk_config),
        }
    }
}

#[async_trait]
impl AgentRuntime for BedrockAgent {
    async fn invoke(&self, request: InvokeRequest) -> Result<Option<CompletionStream>, RelayError> {
        let output = self
            .client
            .invoke_agent()
            .agent_id(request.agent_id)
            .agent_alias_id(request.agent_alias_id)
            .session_id(request.session_id)
            .input_text(request.input_text)
            .send()
            .await
            .map_err(|e| RelayError::Invoke(DisplayErrorContext(e).to_string()))?;

        // The receiver is dropped after the first error so the stream ends there.
        let events = stream::unfold(Some(output.completion), |state| async move {
            let mut receiver = state?;
            match receiver.recv().await {
                Ok(Some(event)) => Some((Ok(to_completion_event(event)), Some(receiver))),
                Ok(None) => None,
                Err(e) => Some((
                    Err(RelayError::Stream(DisplayErrorContext(e).to_string())),
                    None,
                )),
            }
        });
        let completion: CompletionStream = Box::pin(events);

        Ok(Some(completion))
    }
}

fn to_completion_event(event: ResponseStream) -> CompletionEvent {
    match event {
        ResponseStream::Chunk(part) => match part.bytes {
            Some(blob) => CompletionEvent::Chunk(blob.into_inner()),
            None => CompletionEvent::Other,
        },
        _ => CompletionEvent::Other,
    }
}
