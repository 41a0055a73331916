//! Loadboard HTTP Server binary

use loadboard_server::{build_router, logging, AppState, ServerConfig};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;

    if let Some(e) = logging::init_logging(&config.log_filter, config.log_format)? {
        warn!(
            filter = %config.log_filter,
            error = %e,
            "Invalid log filter, falling back to info"
        );
    }

    info!("Starting Loadboard server v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::from_config(&config);

    info!(
        path = %config.loads_path.display(),
        records = state.store.len(),
        "Dataset ready"
    );

    if !state.guard.is_configured() {
        warn!("API_KEY is not set; every /v1/loads request will fail with 500");
    }

    let app = build_router(state);

    info!("Listening on {}", config.bind_address);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down gracefully..."),
        _ = terminate => info!("Received SIGTERM, shutting down gracefully..."),
    }
}
