//! Metrics exposition endpoint.

use crate::state::AppState;
use crate::utils::http_helpers::HTTPError;
use axum::{extract::State, http::header, response::IntoResponse, routing::get, Router};

/// Creates the metrics routes. Scrapers commonly use either spelling.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/metrics/", get(metrics_handler))
        .route("/metrics", get(metrics_handler))
}

/// Handler for the /metrics/ endpoint.
///
/// Returns all collected metrics in Prometheus text format.
/// Scrapes are not themselves counted.
async fn metrics_handler(State(state): State<AppState>) -> Result<impl IntoResponse, HTTPError> {
    let metrics_text = state.metrics.render().map_err(|e| {
        tracing::error!(error = %e, "Failed to encode metrics");
        HTTPError::internal("Failed to encode metrics")
    })?;

    Ok((
        [(
            header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics_text,
    ))
}
