//! Metrics recording implementation using Prometheus.

use prometheus::{Encoder, Histogram, HistogramOpts, IntCounter, Opts, Registry, TextEncoder};
use std::sync::Arc;

/// Default histogram boundaries in seconds. `+Inf` is always appended by the encoder.
pub const DEFAULT_DURATION_BUCKETS: [f64; 14] = [
    0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5, 10.0,
];

/// Trait for recording request metrics.
pub trait MetricsRecorder: Clone + Send + Sync + 'static {
    /// Increments the request counter by exactly one.
    fn increment_counter(&self);

    /// Records one request duration sample, in seconds.
    fn observe_duration(&self, duration_secs: f64);
}

/// Prometheus metrics collector.
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,

    http_requests_total: IntCounter,
    http_request_duration_seconds: Histogram,
}

impl Metrics {
    /// Creates a new metrics instance with the default duration buckets.
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::with_buckets(DEFAULT_DURATION_BUCKETS.to_vec())
    }

    /// Creates a new metrics instance with its own registry and the given
    /// histogram boundaries.
    ///
    /// # Errors
    ///
    /// Fails if any boundary is NaN or the boundaries are not strictly increasing.
    pub fn with_buckets(buckets: Vec<f64>) -> Result<Self, prometheus::Error> {
        validate_buckets(&buckets)?;
        let registry = Arc::new(Registry::new());

        let http_requests_total =
            IntCounter::with_opts(Opts::new("http_requests_total", "Total HTTP Requests"))?;
        registry.register(Box::new(http_requests_total.clone()))?;

        let http_request_duration_seconds = Histogram::with_opts(
            HistogramOpts::new("http_request_duration_seconds", "HTTP request duration")
                .buckets(buckets),
        )?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        Ok(Metrics {
            registry,
            http_requests_total,
            http_request_duration_seconds,
        })
    }

    /// Renders all metrics in Prometheus text format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }

    /// Current value of `http_requests_total`.
    pub fn requests_total(&self) -> u64 {
        self.http_requests_total.get()
    }

    /// Number of samples observed by `http_request_duration_seconds`.
    pub fn duration_sample_count(&self) -> u64 {
        self.http_request_duration_seconds.get_sample_count()
    }

    /// Sum of all samples observed by `http_request_duration_seconds`.
    pub fn duration_sample_sum(&self) -> f64 {
        self.http_request_duration_seconds.get_sample_sum()
    }
}

fn validate_buckets(buckets: &[f64]) -> Result<(), prometheus::Error> {
    if buckets.iter().any(|b| b.is_nan()) {
        return Err(prometheus::Error::Msg(
            "histogram buckets must not contain NaN".to_string(),
        ));
    }
    if !buckets.windows(2).all(|w| w[0] < w[1]) {
        return Err(prometheus::Error::Msg(format!(
            "histogram buckets must be strictly increasing, got {:?}",
            buckets
        )));
    }
    Ok(())
}

impl MetricsRecorder for Metrics {
    fn increment_counter(&self) {
        self.http_requests_total.inc();
    }

    fn observe_duration(&self, duration_secs: f64) {
        // NaN fails this comparison too.
        let duration_secs = if duration_secs >= 0.0 {
            duration_secs
        } else {
            tracing::warn!(duration_secs, "Clamping invalid request duration to zero");
            0.0
        };
        self.http_request_duration_seconds.observe(duration_secs);
    }
}
