// src/config.rs
use std::{net::SocketAddr, path::PathBuf};

use anyhow::{Context, Result};

pub const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "3000";
const DEFAULT_STATIC_DIR: &str = "public";

/// Identifiers of the agent every chat message is sent to.
///
/// Both are optional here on purpose: a missing identifier only fails the
/// relay call that needs it, it does not stop the server from starting.
#[derive(Debug, Clone, Default)]
pub struct AgentSettings {
    pub agent_id: Option<String>,
    pub agent_alias_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub region: String,
    pub static_dir: PathBuf,
    pub agent: AgentSettings,
}

impl AppConfig {
    /// Load `.env` if there is one, then read the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values behave like unset ones.
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = get("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());
        let bind_addr = format!("{host}:{port}")
            .parse()
            .with_context(|| format!("invalid bind address {host}:{port}"))?;

        Ok(Self {
            bind_addr,
            region: get("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            static_dir: get("STATIC_DIR")
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
                .into(),
            agent: AgentSettings {
                agent_id: get("BEDROCK_AGENT_ID"),
                agent_alias_id: get("BEDROCK_AGENT_ALIAS_ID"),
            },
        })
    }
}
