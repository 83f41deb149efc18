#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, Response};
use axum::Router;
use figment::{
    providers::{Format, Yaml},
    Figment,
};
use hellometrics::config::{Config, ConfigV1};
use hellometrics::metrics::Metrics;
use hellometrics::routes::create_router;
use hellometrics::startup::build_state;

pub const TEST_CONFIG: &str = r#"
version: "1.0.0"
bind_address: 127.0.0.1:8081
logging:
  level: "debug"
  format: "json"
page:
  company_name: "Warner Sisters Inc"
  challenge_description: "Deploying applications at scale."
metrics:
  buckets: [0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
"#;

pub fn load_test_config() -> ConfigV1 {
    let config: Config = Figment::new()
        .merge(Yaml::string(TEST_CONFIG))
        .extract()
        .expect("Failed to parse test config YAML");

    match config {
        Config::ConfigV1(cfg) => cfg,
    }
}

/// Builds a router over a fresh registry, returning a handle to that registry.
pub fn build_app(config: ConfigV1) -> (Router, Metrics) {
    let state = build_state(Arc::new(config)).expect("metrics should register");
    let metrics = state.metrics.clone();
    (create_router(state), metrics)
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

/// Parses Prometheus text exposition into `sample name (with labels) -> value`.
pub fn parse_exposition(text: &str) -> HashMap<String, f64> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let (name, value) = line
                .rsplit_once(' ')
                .unwrap_or_else(|| panic!("malformed sample line: {}", line));
            let value = match value {
                "+Inf" => f64::INFINITY,
                "-Inf" => f64::NEG_INFINITY,
                v => v
                    .parse::<f64>()
                    .unwrap_or_else(|_| panic!("malformed sample value: {}", line)),
            };
            (name.to_string(), value)
        })
        .collect()
}
