use std::env;

use serde::Deserialize;

/// Collector address used when `OTEL_COLLECTOR_ENDPOINT` is unset.
pub const DEFAULT_COLLECTOR_ENDPOINT: &str = "http://localhost:4317";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Pretty human-readable format with colors (for local dev)
    #[default]
    Pretty,
    /// JSON structured format (for cloud environments)
    Json,
}

/// Metrics exporter selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricsExporter {
    /// Periodic human-readable dump to standard output
    #[default]
    Stdout,
    /// OTLP over gRPC, sharing the collector endpoint
    Otlp,
}

/// Main telemetry configuration
///
/// Immutable once constructed; the bootstrap reads it and discards it.
/// `collector_endpoint` doubles as the export switch: `None` means tracing
/// API calls succeed but nothing leaves the process.
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_service_version")]
    pub service_version: String,
    #[serde(default = "default_collector_endpoint")]
    pub collector_endpoint: Option<String>,
    #[serde(default)]
    pub sampling_ratio: Option<f64>,
    #[serde(default)]
    pub metrics_exporter: MetricsExporter,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_service_name() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

fn default_service_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_collector_endpoint() -> Option<String> {
    Some(DEFAULT_COLLECTOR_ENDPOINT.to_string())
}

fn default_log_level() -> String {
    "info".to_string()
}

/// An empty endpoint string disables export; anything else is kept verbatim,
/// with no trimming or normalization.
fn endpoint_switch(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl TelemetryConfig {
    /// Create config from environment variables.
    ///
    /// Pure read of environment state. Endpoint strings are not validated
    /// here; a malformed value surfaces later as a connection error.
    ///
    /// - `OTEL_COLLECTOR_ENDPOINT`: unset uses [`DEFAULT_COLLECTOR_ENDPOINT`],
    ///   empty disables export, anything else is taken verbatim
    /// - `OTEL_SERVICE_NAME` / `OTEL_SERVICE_VERSION`: crate name/version otherwise
    /// - `OTEL_TRACE_SAMPLING_RATIO`: f64; unset or unparsable means sample everything
    /// - `OTEL_METRICS_EXPORTER`: `otlp` selects OTLP metrics, anything else stdout
    /// - `RUST_LOG` / `LOG_FORMAT`: log level filter and output format
    pub fn from_env() -> Self {
        let log_format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("pretty") => LogFormat::Pretty,
            _ => LogFormat::Pretty,
        };

        let metrics_exporter = match env::var("OTEL_METRICS_EXPORTER").as_deref() {
            Ok("otlp") => MetricsExporter::Otlp,
            _ => MetricsExporter::Stdout,
        };

        let collector_endpoint = match env::var("OTEL_COLLECTOR_ENDPOINT") {
            Ok(value) => endpoint_switch(value),
            Err(_) => default_collector_endpoint(),
        };

        Self {
            service_name: env::var("OTEL_SERVICE_NAME")
                .unwrap_or_else(|_| default_service_name()),
            service_version: env::var("OTEL_SERVICE_VERSION")
                .unwrap_or_else(|_| default_service_version()),
            collector_endpoint,
            sampling_ratio: env::var("OTEL_TRACE_SAMPLING_RATIO")
                .ok()
                .and_then(|v| v.parse().ok()),
            metrics_exporter,
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| default_log_level()),
            log_format,
        }
    }

    /// Create a new config with explicit values
    pub fn new(service_name: impl Into<String>, service_version: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: service_version.into(),
            collector_endpoint: default_collector_endpoint(),
            sampling_ratio: None,
            metrics_exporter: MetricsExporter::Stdout,
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }

    pub fn builder() -> TelemetryConfigBuilder {
        TelemetryConfigBuilder::default()
    }

    /// Set the collector endpoint; an empty string disables export.
    pub fn with_collector_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.collector_endpoint = endpoint_switch(endpoint.into());
        self
    }

    pub fn with_sampling_ratio(mut self, ratio: f64) -> Self {
        self.sampling_ratio = Some(ratio);
        self
    }

    pub fn with_metrics_exporter(mut self, exporter: MetricsExporter) -> Self {
        self.metrics_exporter = exporter;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }
}

#[derive(Default)]
pub struct TelemetryConfigBuilder {
    service_name: Option<String>,
    service_version: Option<String>,
    collector_endpoint: Option<Option<String>>,
    sampling_ratio: Option<f64>,
    metrics_exporter: Option<MetricsExporter>,
    log_level: Option<String>,
    log_format: Option<LogFormat>,
}

impl TelemetryConfigBuilder {
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = Some(name.into());
        self
    }

    pub fn service_version(mut self, version: impl Into<String>) -> Self {
        self.service_version = Some(version.into());
        self
    }

    /// Set the collector endpoint; an empty string disables export.
    pub fn collector_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.collector_endpoint = Some(endpoint_switch(endpoint.into()));
        self
    }

    pub fn sampling_ratio(mut self, ratio: f64) -> Self {
        self.sampling_ratio = Some(ratio);
        self
    }

    pub fn metrics_exporter(mut self, exporter: MetricsExporter) -> Self {
        self.metrics_exporter = Some(exporter);
        self
    }

    pub fn stdout_metrics(self) -> Self {
        self.metrics_exporter(MetricsExporter::Stdout)
    }

    pub fn otlp_metrics(self) -> Self {
        self.metrics_exporter(MetricsExporter::Otlp)
    }

    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn log_format(mut self, format: LogFormat) -> Self {
        self.log_format = Some(format);
        self
    }

    pub fn json(self) -> Self {
        self.log_format(LogFormat::Json)
    }

    pub fn pretty(self) -> Self {
        self.log_format(LogFormat::Pretty)
    }

    pub fn build(self) -> TelemetryConfig {
        TelemetryConfig {
            service_name: self.service_name.unwrap_or_else(default_service_name),
            service_version: self.service_version.unwrap_or_else(default_service_version),
            collector_endpoint: self
                .collector_endpoint
                .unwrap_or_else(default_collector_endpoint),
            sampling_ratio: self.sampling_ratio,
            metrics_exporter: self.metrics_exporter.unwrap_or_default(),
            log_level: self.log_level.unwrap_or_else(default_log_level),
            log_format: self.log_format.unwrap_or_default(),
        }
    }
}
