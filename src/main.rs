use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bedrock_agent_relay::{
    config::AppConfig,
    routes,
    services::bedrock::BedrockAgent,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "bedrock_agent_relay=debug,tower_http=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let agent = BedrockAgent::from_region(config.region.clone()).await;
    let state = Arc::new(AppState::new(Arc::new(agent), config.agent.clone()));

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router(&config.static_dir)
        .with_state(state)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "bedrock agent relay listening");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
