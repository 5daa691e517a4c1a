use opentelemetry::trace::TracerProvider;
use opentelemetry_sdk::metrics::SdkMeterProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;

use crate::error::TelemetryError;

/// Handle over the bootstrapped providers.
///
/// The globals installed during bootstrap hold clones of the same providers,
/// so this handle can be threaded through application components while the
/// crate-level accessors keep working at the composition boundary. Dropping
/// the guard without calling [`TelemetryGuard::shutdown`] loses
/// buffered-but-unflushed telemetry.
#[derive(Debug)]
pub struct TelemetryGuard {
    tracer_provider: SdkTracerProvider,
    meter_provider: SdkMeterProvider,
}

impl TelemetryGuard {
    pub(crate) fn new(
        tracer_provider: SdkTracerProvider,
        meter_provider: SdkMeterProvider,
    ) -> Self {
        Self {
            tracer_provider,
            meter_provider,
        }
    }

    /// Tracer under the given instrumentation scope, served by this guard's
    /// provider rather than the global accessor.
    pub fn tracer(&self, name: &'static str) -> opentelemetry_sdk::trace::Tracer {
        self.tracer_provider.tracer(name)
    }

    pub fn tracer_provider(&self) -> &SdkTracerProvider {
        &self.tracer_provider
    }

    pub fn meter_provider(&self) -> &SdkMeterProvider {
        &self.meter_provider
    }

    /// Push buffered spans and metrics to their exporters without tearing
    /// anything down.
    pub fn force_flush(&self) -> Result<(), TelemetryError> {
        self.tracer_provider
            .force_flush()
            .map_err(|e| TelemetryError::Flush(e.to_string()))?;
        self.meter_provider
            .force_flush()
            .map_err(|e| TelemetryError::Flush(e.to_string()))?;
        Ok(())
    }

    /// Drain buffered telemetry and close both providers.
    ///
    /// The meter provider is shut down even when the tracer provider fails;
    /// the first error wins. Blocks while batches flush, so call it off the
    /// async runtime's worker threads.
    pub fn shutdown(self) -> Result<(), TelemetryError> {
        let trace_result = self.tracer_provider.shutdown();
        let metrics_result = self.meter_provider.shutdown();

        trace_result.map_err(|e| TelemetryError::Shutdown(e.to_string()))?;
        metrics_result.map_err(|e| TelemetryError::Shutdown(e.to_string()))?;
        Ok(())
    }
}
