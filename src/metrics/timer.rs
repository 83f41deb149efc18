//! Scoped timing of a single request.

use std::time::Instant;

use super::MetricsRecorder;

/// Times one request against a [`MetricsRecorder`].
///
/// The duration is observed and the request counter incremented when the
/// timer is dropped, so both are recorded on every exit path of the
/// handler, including early returns with an error.
pub struct RequestTimer<R: MetricsRecorder> {
    recorder: R,
    start: Instant,
}

impl<R: MetricsRecorder> RequestTimer<R> {
    /// Captures the start instant.
    pub fn start(recorder: R) -> Self {
        RequestTimer {
            recorder,
            start: Instant::now(),
        }
    }

    /// Seconds elapsed since the timer was started.
    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl<R: MetricsRecorder> Drop for RequestTimer<R> {
    fn drop(&mut self) {
        let elapsed = self.elapsed_secs();
        self.recorder.observe_duration(elapsed);
        self.recorder.increment_counter();
        tracing::debug!(duration_secs = elapsed, "Request metrics recorded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Metrics;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn records_once_when_dropped() {
        let metrics = Metrics::new().unwrap();
        {
            let _timer = RequestTimer::start(metrics.clone());
            assert_eq!(metrics.requests_total(), 0);
            assert_eq!(metrics.duration_sample_count(), 0);
        }
        assert_eq!(metrics.requests_total(), 1);
        assert_eq!(metrics.duration_sample_count(), 1);
    }

    #[test]
    fn observed_duration_covers_the_scope() {
        let metrics = Metrics::new().unwrap();
        {
            let _timer = RequestTimer::start(metrics.clone());
            sleep(Duration::from_millis(20));
        }
        let sum = metrics.duration_sample_sum();
        assert!(sum >= 0.02, "expected at least 20ms, got {}", sum);
    }

    #[test]
    fn records_on_error_path() {
        fn failing(metrics: &Metrics) -> Result<u32, String> {
            let _timer = RequestTimer::start(metrics.clone());
            let parsed = "not a number".parse::<u32>().map_err(|e| e.to_string())?;
            Ok(parsed + 1)
        }

        let metrics = Metrics::new().unwrap();
        assert!(failing(&metrics).is_err());
        assert_eq!(metrics.requests_total(), 1);
        assert_eq!(metrics.duration_sample_count(), 1);
    }
}
