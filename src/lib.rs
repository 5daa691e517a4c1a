//! Observability bootstrap for services exporting OTLP traces and metrics.
//!
//! Initialization glue wiring the OpenTelemetry SDK into a host application:
//! resolve a [`TelemetryConfig`] from the environment, build a tracer
//! provider (OTLP over gRPC, batched) and a meter provider (periodic stdout
//! or OTLP export), install both plus a trace-context + baggage propagator
//! as process-wide defaults, and hand back a [`TelemetryGuard`] for flush
//! and shutdown. Span collection, batching, sampling, and transport all live
//! in the SDK and its exporters; this crate contributes configuration and
//! wiring only.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! let config = otel_bootstrap::TelemetryConfig::from_env();
//! let guard = otel_bootstrap::init_with_config(&config)?;
//! otel_bootstrap::init_subscriber(guard.tracer_provider(), &config)?;
//!
//! // ... run the application ...
//!
//! guard.shutdown()?;
//! ```
//!
//! A failed bootstrap installs nothing and returns the error; treating it as
//! fatal is the composition root's call. `init` must run inside a Tokio
//! runtime when export is enabled.
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `OTEL_COLLECTOR_ENDPOINT` | Collector address; empty disables export | `http://localhost:4317` |
//! | `OTEL_SERVICE_NAME` | Service name | `CARGO_PKG_NAME` |
//! | `OTEL_SERVICE_VERSION` | Service version | `CARGO_PKG_VERSION` |
//! | `OTEL_TRACE_SAMPLING_RATIO` | Trace sampling ratio in `[0.0, 1.0]` | sample everything |
//! | `OTEL_METRICS_EXPORTER` | `stdout` or `otlp` | `stdout` |
//! | `RUST_LOG` | Log level filter | `info` |
//! | `LOG_FORMAT` | `pretty` or `json` | `pretty` |
//!
//! # Module Structure
//!
//! - [`api`]: Initialization entry points and global accessors
//! - [`config`]: Configuration types
//! - [`error`]: Error types
//! - [`provider`]: Tracer provider and collector channel construction
//! - [`metrics`]: Meter provider construction
//! - [`resource`]: Resource descriptor construction
//! - [`propagation`]: Context propagation helpers
//! - [`trace`]: `tracing` subscriber glue
//! - [`guard`]: Flush/shutdown handle

pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod metrics;
pub mod propagation;
pub mod provider;
pub mod resource;
pub mod trace;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports
pub use api::{init, init_with_config, meter, tracer};
pub use config::{
    LogFormat, MetricsExporter, TelemetryConfig, TelemetryConfigBuilder,
    DEFAULT_COLLECTOR_ENDPOINT,
};
pub use error::TelemetryError;
pub use guard::TelemetryGuard;
pub use propagation::{extract_context, inject_context};
pub use trace::init_subscriber;
