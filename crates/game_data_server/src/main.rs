//! Game Data Service - HTTP entry point

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use game_data_db::MysqlGameStore;
use game_data_server::{AppState, Cli, ServiceConfig, router};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::load(cli.config.as_deref())?.override_server(
        cli.host,
        cli.port,
        cli.prefix,
    );
    info!(?config, "Configuration resolved");

    let store = MysqlGameStore::connect(&config.database().connection_url()?)?;

    let state = AppState::new(Arc::new(store.clone()), *config.server().expose_db_errors());
    let app = router(state, config.server().route_prefix());

    let listener =
        TcpListener::bind((config.server().host().as_str(), *config.server().port())).await?;
    info!(
        addr = %listener.local_addr()?,
        prefix = %config.server().normalized_prefix(),
        "✅ Game Data Service running"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped, releasing database connection");
    store.close();

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
