//! Application startup and server initialization.
//!
//! Builds the metrics registry and shared state, then serves the router
//! until the process receives Ctrl-C.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ConfigV1;
use crate::metrics::Metrics;
use crate::routes;
use crate::state::AppState;

/// Creates the shared state for the given configuration.
///
/// # Errors
///
/// Returns an error if the configured histogram buckets are invalid.
pub fn build_state(config: Arc<ConfigV1>) -> Result<AppState, prometheus::Error> {
    let metrics = Metrics::with_buckets(config.metrics.buckets())?;
    Ok(AppState { config, metrics })
}

/// Initializes and runs the application server.
///
/// # Errors
///
/// Returns an error if the metrics registry cannot be built, the server
/// fails to bind to the configured address, or serving fails.
pub async fn run(config: Arc<ConfigV1>) -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state(config.clone())?;
    let app = routes::create_router(state);

    let listener = TcpListener::bind(&config.bind_address).await?;
    info!(address = %listener.local_addr()?, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
