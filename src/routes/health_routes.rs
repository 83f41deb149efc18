//! Liveness probe.

use crate::state::AppState;
use axum::{http::StatusCode, routing::get, Router};

/// Registers health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Always 200 while the process is serving. Not counted in request metrics.
async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
