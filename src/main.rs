use std::sync::Arc;

use anyhow::Context;

use dcs_guide::chat::{self, ChatEngine, ConversationStore, SystemClock};
use dcs_guide::config::ServiceConfig;
use dcs_guide::notify::Notifier;
use dcs_guide::questionnaire::DegradingStore;
use dcs_guide::server::{AppDeps, build_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServiceConfig::from_env().context("invalid configuration")?;

    let store = ConversationStore::new(Arc::new(SystemClock), config.session_ttl);
    let _eviction_handle = chat::spawn_eviction_task(store.clone(), config.sweep_interval);
    let engine = Arc::new(ChatEngine::new(store, config.processing_budget));

    let notifier = Arc::new(Notifier::from_settings(&config.email));
    let submissions = Arc::new(DegradingStore::from_settings(config.supabase.clone()));

    tracing::info!(
        email_service = %config.email.service,
        supabase = config.supabase.is_some(),
        session_ttl_secs = config.session_ttl.as_secs(),
        "Services configured"
    );

    let app = build_router(AppDeps {
        engine,
        notifier,
        submissions,
    });

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("failed to bind port {}", config.port))?;
    tracing::info!(port = config.port, "DCS guide server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutting down");
        })
        .await
        .context("server error")?;

    Ok(())
}
