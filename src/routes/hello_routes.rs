//! Informational page handler.

use axum::extract::State;
use axum::response::Html;
use axum::{routing::get, Router};

use crate::metrics::RequestTimer;
use crate::pages::render_hello_page;
use crate::state::AppState;
use crate::utils::http_helpers::HTTPError;

/// Registers the page route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/hello/", get(hello_world))
}

/// Renders the static page.
///
/// Every invocation is timed into `http_request_duration_seconds` and
/// counted in `http_requests_total`, including failed renders.
async fn hello_world(State(state): State<AppState>) -> Result<Html<String>, HTTPError> {
    let _timer = RequestTimer::start(state.metrics.clone());

    let body = render_hello_page(&state.config.page).map_err(|e| {
        tracing::error!(error = %e, "Failed to render hello page");
        HTTPError::internal("Failed to render page")
    })?;

    Ok(Html(body))
}
