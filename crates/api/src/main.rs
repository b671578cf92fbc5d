use std::net::{IpAddr, SocketAddr};

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinema_api::app;
use cinema_api::config::ServerConfig;
use cinema_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinema_api=debug,cinema_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = run().await {
        tracing::error!("Server terminated: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // --- Configuration ---
    let config = ServerConfig::from_env()?;
    tracing::info!(
        host = %config.host,
        port = %config.port,
        database_url = %config.database_url,
        "Loaded server configuration"
    );

    // --- Database ---
    let pool = app::open_store(&config)
        .await
        .context("Error opening database")?;

    // --- Router ---
    let state = AppState { pool: pool.clone() };
    let router = app::build_app(state);

    // --- Start server ---
    let host = config.host.parse::<IpAddr>().context("Invalid HOST address")?;
    let addr = SocketAddr::new(host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    tracing::info!(%addr, "Server running at http://localhost:{}/", config.port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped accepting connections, closing database");
    pool.close().await;
    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for SIGINT or (on Unix) SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
