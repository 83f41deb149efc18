//! Shared application state.
//!
//! Contains the state that is shared across all request handlers:
//! configuration and the metrics registry.

use crate::config::ConfigV1;
use crate::metrics::Metrics;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// Cloned for each request; both fields are cheap reference-counted handles,
/// so every clone updates and reads the same counter and histogram.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<ConfigV1>,
    /// Process-wide request metrics.
    pub metrics: Metrics,
}
