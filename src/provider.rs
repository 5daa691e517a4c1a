use opentelemetry_otlp::WithTonicConfig;
use opentelemetry_sdk::trace::{Sampler, SdkTracerProvider};
use tonic::transport::{Channel, Endpoint};

use crate::config::TelemetryConfig;
use crate::error::TelemetryError;
use crate::resource::build_resource;

/// Open a lazily-connecting gRPC channel to the collector.
///
/// The dial happens in the background on first use, so an unreachable
/// collector does not fail here; only a malformed endpoint does. Scheme-less
/// `host:port` values are dialed over plain HTTP/2, the insecure transport
/// this crate assumes throughout. Requires an ambient Tokio runtime.
pub(crate) fn build_collector_channel(endpoint: &str) -> Result<Channel, TelemetryError> {
    let uri = if endpoint.contains("://") {
        endpoint.to_string()
    } else {
        format!("http://{}", endpoint)
    };

    let channel = Endpoint::from_shared(uri)
        .map_err(|e| TelemetryError::Connection(e.to_string()))?
        .connect_lazy();

    Ok(channel)
}

/// Build the tracer provider for the given config.
///
/// With an endpoint configured: a lazy channel to the collector, an OTLP
/// span exporter bound to it, a batching span processor, the configured
/// sampler, and the merged resource. Without one: a provider with no span
/// processor, so tracing API calls succeed but nothing is exported and no
/// connection is ever attempted.
pub fn build_tracer_provider(
    config: &TelemetryConfig,
) -> Result<SdkTracerProvider, TelemetryError> {
    let resource = build_resource(config);
    let sampler = select_sampler(config.sampling_ratio);

    let provider = match &config.collector_endpoint {
        Some(endpoint) => {
            let channel = build_collector_channel(endpoint)?;
            let exporter = opentelemetry_otlp::SpanExporter::builder()
                .with_tonic()
                .with_channel(channel)
                .build()
                .map_err(|e: opentelemetry_otlp::ExporterBuildError| {
                    TelemetryError::Exporter(e.to_string())
                })?;

            SdkTracerProvider::builder()
                .with_batch_exporter(exporter)
                .with_sampler(sampler)
                .with_resource(resource)
                .build()
        }
        None => SdkTracerProvider::builder()
            .with_sampler(sampler)
            .with_resource(resource)
            .build(),
    };

    Ok(provider)
}

/// Sample everything unless a ratio is configured; ratios are clamped into
/// [0.0, 1.0] rather than rejected.
fn select_sampler(ratio: Option<f64>) -> Sampler {
    match ratio {
        Some(ratio) => Sampler::TraceIdRatioBased(ratio.clamp(0.0, 1.0)),
        None => Sampler::AlwaysOn,
    }
}
