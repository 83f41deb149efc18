use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::metrics::MetricsConfig;
use super::page::PageConfig;

/// Environment variable holding the path of the YAML config file.
pub const CONFIG_PATH_ENV: &str = "HELLOMETRICS_CONFIG";
/// Config file used when `HELLOMETRICS_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "./config.yaml";
/// Prefix for environment overrides, e.g. `HELLOMETRICS_BIND_ADDRESS`.
pub const ENV_PREFIX: &str = "HELLOMETRICS_";

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize, JsonSchema)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ConfigV1),
}

/// Main config for v1.0.0.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct ConfigV1 {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

fn default_bind_address() -> String {
    "0.0.0.0:8000".to_string()
}

impl Default for ConfigV1 {
    fn default() -> Self {
        ConfigV1 {
            bind_address: default_bind_address(),
            logging: LoggingConfig::default(),
            page: PageConfig::default(),
            metrics: MetricsConfig::default(),
        }
    }
}

/// Path of the config file, taken from `HELLOMETRICS_CONFIG` if set.
pub fn config_path() -> String {
    std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

/// Layers built-in defaults, the YAML file at `path` (skipped if missing)
/// and `HELLOMETRICS_*` environment variables.
pub fn config_sources(path: &str) -> Figment {
    Figment::from(Serialized::defaults(Config::ConfigV1(ConfigV1::default())))
        .merge(Yaml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).ignore(&["config"]).split("__"))
}

/// Load config from the layered sources described in [`config_sources`].
pub fn load_config(path: &str) -> Result<ConfigV1, figment::Error> {
    let config = config_sources(path).extract::<Config>()?;
    match config {
        Config::ConfigV1(c) => Ok(c),
    }
}

/// Print the JSON schema for the configuration to stdout.
pub fn print_schema() -> Result<(), serde_json::Error> {
    let schema = schema_for!(Config);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
