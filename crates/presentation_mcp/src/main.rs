//! Weather MCP server
//!
//! Serves the `get_forecast` tool over stdio until the client disconnects
//! or the process is asked to stop.

use std::sync::Arc;

use application::ForecastService;
use infrastructure::{AppConfig, WeatherAdapter, init_logging};
use presentation_mcp::WeatherMcpServer;
use rmcp::ServiceExt;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    init_logging(&config.logging)?;

    if let Err(e) = &loaded {
        tracing::warn!("Failed to load config, using defaults: {}", e);
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.weather.base_url,
        timeout_secs = config.weather.timeout_secs,
        "Starting weather MCP server"
    );

    let adapter = Arc::new(
        WeatherAdapter::new(config.weather.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize weather client: {e}"))?,
    );
    let service = ForecastService::new(adapter.clone(), adapter);

    let running = WeatherMcpServer::new(service)
        .serve(rmcp::transport::stdio())
        .await?;

    tokio::select! {
        quit = running.waiting() => {
            let reason = quit?;
            info!(?reason, "Client disconnected");
        }
        () = shutdown_signal() => {}
    }

    info!("Weather MCP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        }
        () = terminate => {
            info!("Received SIGTERM, shutting down");
        }
    }
}
