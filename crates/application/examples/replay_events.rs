//! Example: replay a short editing session through the presence pipeline.
//!
//! Payloads are printed instead of being sent to a presence service.
//!
//! Run with: cargo run -p presence-application --example replay_events

use async_trait::async_trait;
use presence_application::{
    EditorEvent, GitContext, IdleEvent, PresenceClient, PresenceConfig, PresencePayload,
    PresenceService,
};
use presence_types::ClientError;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Client that prints every payload as JSON.
struct StdoutClient;

#[async_trait]
impl PresenceClient for StdoutClient {
    async fn login(&self, application_id: &str) -> Result<(), ClientError> {
        println!("login {application_id}");
        Ok(())
    }

    async fn logout(&self) {
        println!("logout");
    }

    async fn set_activity(&self, payload: &PresencePayload) -> Result<(), ClientError> {
        let json = serde_json::to_string_pretty(payload)
            .map_err(|e| ClientError::Rejected(e.to_string()))?;
        println!("{json}");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,presence=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let path = presence_config::config_path();
    let mut config = presence_config::load_or_default(&path);
    if config.application_id.is_empty() {
        config.application_id = "example".to_string();
    }
    config.debounce_ms = 500;

    let service = PresenceService::new(config, Arc::new(StdoutClient));
    service.start().await?;

    let started_at = chrono::Utc::now();
    let git = GitContext::new("https://github.com/zerootoad/discord-rpc-lsp", "main");

    // A burst: only the last file shows up
    let mut last = None;
    for file in ["main.rs", "lib.rs", "service.rs"] {
        let event = EditorEvent::new("Editing", file, "presence", "neovim", started_at)
            .with_language("rust")
            .with_git(git.clone());
        last = Some(service.update_activity(&event).await);
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    if let Some(ticket) = last {
        tracing::info!(outcome = ?ticket.outcome().await, "burst settled");
    }

    let idle = IdleEvent::new("Idling", "", "presence", "neovim").with_git(git);
    let outcome = service.clear_activity(&idle).await.outcome().await;
    tracing::info!(?outcome, "cleared");

    service.shutdown().await;
    Ok(())
}
