// src/state.rs
use std::sync::Arc;

use crate::config::AgentSettings;
use crate::services::agent::AgentRuntime;

pub type SharedState = Arc<AppState>;

/// Read-only after startup; shared by every request.
pub struct AppState {
    pub agent: Arc<dyn AgentRuntime>,
    pub settings: AgentSettings,
}

impl AppState {
    pub fn new(agent: Arc<dyn AgentRuntime>, settings: AgentSettings) -> Self {
        Self { agent, settings }
    }
}
