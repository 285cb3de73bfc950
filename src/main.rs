mod api_doc;
mod app;
mod config;
mod error;
mod handlers;
mod maze;
mod models;
mod routes;

use anyhow::Context;
use config::Config;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pathbot_mock=info,tower_http=info")),
        )
        .init();

    tracing::info!("pathbot-mock starting");

    let config = Config::from_env()?;
    config.log_startup();

    let listener = TcpListener::bind((config.service_host.as_str(), config.service_port))
        .await
        .with_context(|| {
            format!("failed to bind {}:{}", config.service_host, config.service_port)
        })?;

    tracing::info!("Pathbot testing server listening on {}", listener.local_addr()?);

    axum::serve(listener, app::build_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("pathbot-mock stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
