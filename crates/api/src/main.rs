//! SkillSync mock API server.

use mock_api::MockApi;
use skillsync_api::config::Config;
use skillsync_api::state::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    info!(latency = %config.api.latency, "Starting SkillSync mock API");

    let api = MockApi::from_config(&config.api).await;
    let app = skillsync_api::app(AppState::new(api));

    info!(addr = %config.addr, "SkillSync mock API listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
