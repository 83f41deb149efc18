//! Tracing subscriber setup.

use chrono::{SecondsFormat, Utc};
use serde_json::{json, Map, Value};
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// Collects event fields into a JSON object.
#[derive(Default)]
struct FieldCollector(Map<String, Value>);

impl Visit for FieldCollector {
    fn record_i64(&mut self, field: &Field, value: i64) {
        self.0.insert(field.name().to_string(), value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.0.insert(field.name().to_string(), value.into());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.0.insert(field.name().to_string(), value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.0.insert(field.name().to_string(), value.into());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.into());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0
            .insert(field.name().to_string(), format!("{:?}", value).into());
    }
}

/// One JSON object per line, shaped after the OpenTelemetry log data model.
#[derive(Clone)]
struct OtelJsonFormat {
    service_name: String,
    service_version: String,
}

fn severity_number(level: &Level) -> u64 {
    match *level {
        Level::TRACE => 1,
        Level::DEBUG => 5,
        Level::INFO => 9,
        Level::WARN => 13,
        Level::ERROR => 17,
    }
}

impl<S, N> FormatEvent<S, N> for OtelJsonFormat
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let mut fields = FieldCollector::default();
        event.record(&mut fields);
        let mut attributes = fields.0;

        let body = match attributes.remove("message") {
            Some(Value::String(message)) => message,
            _ => metadata.name().to_string(),
        };
        attributes.insert("code.target".to_string(), metadata.target().into());
        if let Some(file) = metadata.file() {
            attributes.insert("code.filepath".to_string(), file.into());
        }
        if let Some(line) = metadata.line() {
            attributes.insert("code.lineno".to_string(), line.into());
        }

        let record = json!({
            "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            "severity_text": metadata.level().as_str(),
            "severity_number": severity_number(metadata.level()),
            "body": body,
            "resource": {
                "service.name": self.service_name,
                "service.version": self.service_version,
            },
            "attributes": attributes,
        });

        let line = serde_json::to_string(&record).map_err(|_| std::fmt::Error)?;
        writer.write_str(&line)?;
        writer.write_char('\n')
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid logging.level '{0}'. Valid values: trace, debug, info, warn, error")]
    InvalidLevel(String),
    #[error("Invalid logging.format '{0}'. Valid values: json, console")]
    InvalidFormat(String),
    #[error("failed to install tracing subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Parses a `logging.level` value.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        _ => Err(LoggingError::InvalidLevel(level.to_string())),
    }
}

/// Installs the global tracing subscriber. `RUST_LOG` directives are
/// honoured on top of the configured level.
pub fn init_logging(logging_config: &LoggingConfig) -> Result<(), LoggingError> {
    let level_filter = parse_level(&logging_config.level)?;
    let filter_layer = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .from_env_lossy();

    let result = match logging_config.format.trim().to_lowercase().as_str() {
        "json" => tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt::layer().event_format(OtelJsonFormat {
                service_name: logging_config.service_name.clone(),
                service_version: logging_config.service_version.clone(),
            }))
            .try_init(),
        "console" => tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt::layer().pretty())
            .try_init(),
        other => return Err(LoggingError::InvalidFormat(other.to_string())),
    };

    Ok(result?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels_case_insensitively() {
        assert_eq!(parse_level("INFO").unwrap(), LevelFilter::INFO);
        assert_eq!(parse_level(" debug ").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_level("error").unwrap(), LevelFilter::ERROR);
    }

    #[test]
    fn rejects_unknown_level() {
        let err = parse_level("verbose").unwrap_err();
        assert!(matches!(&err, LoggingError::InvalidLevel(level) if level == "verbose"));
        assert!(err.to_string().contains("Valid values"));
    }

    #[test]
    fn rejects_unknown_format() {
        let config = LoggingConfig {
            format: "xml".to_string(),
            ..LoggingConfig::default()
        };
        assert!(matches!(
            init_logging(&config),
            Err(LoggingError::InvalidFormat(format)) if format == "xml"
        ));
    }

    #[test]
    fn invalid_level_is_reported_before_format() {
        let config = LoggingConfig {
            level: "loud".to_string(),
            format: "xml".to_string(),
            ..LoggingConfig::default()
        };
        assert!(matches!(
            init_logging(&config),
            Err(LoggingError::InvalidLevel(_))
        ));
    }

    #[test]
    fn severity_numbers_follow_otel() {
        assert_eq!(severity_number(&Level::INFO), 9);
        assert_eq!(severity_number(&Level::ERROR), 17);
    }
}
