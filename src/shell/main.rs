use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use attendance::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use attendance::shell::config::AppConfig;
use attendance::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("invalid log filter")?;
    fmt().with_env_filter(filter).init();

    // In-memory store for now
    let store = Arc::new(InMemoryRecordStore::new());
    let app = attendance::shell::app(AppState::new(store, config.sessions.clone()));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(
        collection = %config.sessions.collection,
        resume_open_shift = config.sessions.resume_open_shift,
        "attendance service listening on http://{}",
        config.bind_addr
    );
    axum::serve(listener, app).await?;
    Ok(())
}
