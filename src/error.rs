use thiserror::Error;

/// Errors surfaced while bootstrapping or tearing down telemetry.
///
/// Every variant corresponds to one construction or teardown step, so the
/// message always identifies where the failure happened. Nothing is retried
/// internally; the caller decides whether a failed bootstrap aborts startup.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The gRPC channel to the collector could not be created.
    #[error("failed to create gRPC connection to collector: {0}")]
    Connection(String),
    /// A span or metric exporter could not be built.
    #[error("failed to create exporter: {0}")]
    Exporter(String),
    /// The global tracing subscriber could not be installed.
    #[error("failed to initialize telemetry: {0}")]
    Init(String),
    /// A provider reported an error while flushing buffered telemetry.
    #[error("failed to flush telemetry: {0}")]
    Flush(String),
    /// A provider reported an error while shutting down.
    #[error("failed to shut down telemetry: {0}")]
    Shutdown(String),
}
