use opentelemetry::global::{self, BoxedTracer};
use opentelemetry::metrics::Meter;
use opentelemetry_sdk::metrics::SdkMeterProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;

use crate::config::TelemetryConfig;
use crate::error::TelemetryError;
use crate::guard::TelemetryGuard;
use crate::metrics::build_meter_provider;
use crate::propagation::composite_propagator;
use crate::provider::build_tracer_provider;

/// Instrumentation scope under which the crate-level accessors operate.
const SCOPE_NAME: &str = env!("CARGO_PKG_NAME");

/// Bootstrap telemetry from environment variables.
///
/// Must run inside a Tokio runtime when export is enabled; the collector
/// channel and exporter I/O are driven by it.
pub fn init() -> Result<TelemetryGuard, TelemetryError> {
    init_with_config(&TelemetryConfig::from_env())
}

/// Bootstrap telemetry with an explicit config.
///
/// Builds the tracer provider, the meter provider, and the composite
/// propagator, and only once every step has succeeded installs all three as
/// the process-wide defaults. On error the previously installed globals, if
/// any, are left untouched. Re-invoking replaces the installed providers
/// (last writer wins); the replaced ones keep exporting what they already
/// buffered until dropped.
///
/// Failing to bootstrap is a startup precondition failure. The error is
/// returned rather than acted on, so the composition root decides whether
/// to abort.
pub fn init_with_config(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let tracer_provider = build_tracer_provider(config)?;
    let meter_provider = build_meter_provider(config)?;

    install_providers(tracer_provider.clone(), meter_provider.clone());

    Ok(TelemetryGuard::new(tracer_provider, meter_provider))
}

/// Install providers and the composite propagator as process-wide defaults.
/// Infallible; runs only after every construction step has succeeded.
pub(crate) fn install_providers(
    tracer_provider: SdkTracerProvider,
    meter_provider: SdkMeterProvider,
) {
    global::set_tracer_provider(tracer_provider);
    global::set_meter_provider(meter_provider);
    global::set_text_map_propagator(composite_propagator());
}

/// Tracer from the globally installed provider, scoped to this crate.
///
/// Fetched on every call, so a re-bootstrap is immediately visible and no
/// handle to a replaced provider lingers here.
pub fn tracer() -> BoxedTracer {
    global::tracer(SCOPE_NAME)
}

/// Meter from the globally installed provider, scoped to this crate.
///
/// Fetched on every call, like [`tracer`].
pub fn meter() -> Meter {
    global::meter(SCOPE_NAME)
}
