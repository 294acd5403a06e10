use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ytsearch_api::api::{create_app, AppState};
use ytsearch_api::config::Config;
use ytsearch_api::models::{HEALTH_PATH, ROOT_PATH, SEARCH_USAGE};
use ytsearch_api::services::YouTubeSearchProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ytsearch_api=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(env_filter)
        .init();

    let config = Config::from_env()?;

    // Initialize application state
    let provider = YouTubeSearchProvider::new()?;
    let state = AppState::new(Arc::new(provider));

    // Create the application with all routes
    let app = create_app(state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        "YouTube Search API running at http://localhost:{}",
        config.port
    );
    tracing::info!(search = SEARCH_USAGE, health = HEALTH_PATH, info = ROOT_PATH, "Endpoints");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Received shutdown signal");
}
