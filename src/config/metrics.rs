use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::metrics::DEFAULT_DURATION_BUCKETS;

/// Request metrics settings.
#[derive(Deserialize, Serialize, Debug, Clone, Default, JsonSchema)]
pub struct MetricsConfig {
    /// Upper bounds of the duration histogram in seconds, strictly increasing.
    /// The `+Inf` bucket is implicit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buckets: Option<Vec<f64>>,
}

impl MetricsConfig {
    /// Configured buckets, or the defaults when unset or empty.
    pub fn buckets(&self) -> Vec<f64> {
        match &self.buckets {
            Some(buckets) if !buckets.is_empty() => buckets.clone(),
            _ => DEFAULT_DURATION_BUCKETS.to_vec(),
        }
    }
}
