#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bedrock_agent_relay::config::AgentSettings;
use bedrock_agent_relay::error::RelayError;
use bedrock_agent_relay::services::agent::{
    AgentRuntime, CompletionEvent, CompletionStream, InvokeRequest,
};
use bedrock_agent_relay::state::{AppState, SharedState};
use futures::stream;
use tokio::sync::Mutex;

/// What the fake agent does when invoked.
#[derive(Clone)]
pub enum Script {
    Chunks(Vec<&'static str>),
    NoStream,
    InvokeFails,
    StreamFailsAfter(Vec<&'static str>),
}

pub struct FakeAgent {
    script: Script,
    delay: Duration,
    requests: Mutex<Vec<InvokeRequest>>,
}

impl FakeAgent {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            delay: Duration::ZERO,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub async fn requests(&self) -> Vec<InvokeRequest> {
        self.requests.lock().await.clone()
    }
}

fn chunks(texts: &[&'static str]) -> Vec<Result<CompletionEvent, RelayError>> {
    texts
        .iter()
        .map(|t| Ok(CompletionEvent::Chunk(t.as_bytes().to_vec())))
        .collect()
}

#[async_trait]
impl AgentRuntime for FakeAgent {
    async fn invoke(&self, request: InvokeRequest) -> Result<Option<CompletionStream>, RelayError> {
        self.requests.lock().await.push(request);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match &self.script {
            Script::Chunks(texts) => Ok(Some(Box::pin(stream::iter(chunks(texts))))),
            Script::NoStream => Ok(None),
            Script::InvokeFails => Err(RelayError::Invoke("network unreachable".into())),
            Script::StreamFailsAfter(texts) => {
                let mut events = chunks(texts);
                events.push(Err(RelayError::Stream("malformed frame".into())));
                Ok(Some(Box::pin(stream::iter(events))))
            }
        }
    }
}

pub fn configured() -> AgentSettings {
    AgentSettings {
        agent_id: Some("AGENT123".to_string()),
        agent_alias_id: Some("ALIAS456".to_string()),
    }
}

pub fn state_with(agent: Arc<FakeAgent>, settings: AgentSettings) -> SharedState {
    Arc::new(AppState::new(agent, settings))
}
