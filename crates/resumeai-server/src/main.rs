//! ResumeAI HTTP Server
//!
//! Serves resume generation, optimization and the usage dashboard.

use anyhow::Result;
use resumeai_core::ActivityLog;
use resumeai_server::{
    api::{self, AppState},
    config::ServerConfig,
    provider::init_llm_client,
    service::GenerationService,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Initialize tracing
    init_tracing(&config.log_filter())?;
    info!("Loaded configuration: {:?}", config);

    // Initialize LLM client
    let client = init_llm_client(&config)?;
    info!(
        "LLM client initialized (provider: {}, model: {})",
        config.llm.provider_name(),
        config.llm.model()
    );

    let service = GenerationService::new(client, config.llm.model())
        .with_min_output_chars(config.min_output_chars);
    let state = AppState::new(Arc::new(service), Arc::new(ActivityLog::new()))
        .with_recent_activity_limit(config.recent_activity_limit);

    let app = api::create_router(state);

    // Start server
    let addr = config.bind_address();
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Generate resume: POST http://{}/generate-resume", addr);
    info!("  Optimize resume: POST http://{}/optimize-resume", addr);
    info!("  Usage stats: http://{}/dashboard/usage-stats", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(default_filter: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
