//! Metrics collection and exposition for Prometheus.
//!
//! This module owns the request counter and duration histogram, and the
//! scoped timer handlers use to update them.

mod recorder;
mod timer;

pub use recorder::{Metrics, MetricsRecorder, DEFAULT_DURATION_BUCKETS};
pub use timer::RequestTimer;
