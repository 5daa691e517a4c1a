use opentelemetry_otlp::WithTonicConfig;
use opentelemetry_sdk::metrics::SdkMeterProvider;

use crate::config::{MetricsExporter, TelemetryConfig};
use crate::error::TelemetryError;
use crate::provider::build_collector_channel;
use crate::resource::build_resource;

/// Build the meter provider for the given config.
///
/// Stdout metrics flow through a periodic reader dumping to standard output
/// for local inspection. OTLP metrics share the collector endpoint over
/// their own lazy channel. With OTLP selected and export disabled the
/// provider is built without a reader, so metric API calls succeed but
/// record nowhere.
pub fn build_meter_provider(config: &TelemetryConfig) -> Result<SdkMeterProvider, TelemetryError> {
    let builder = SdkMeterProvider::builder().with_resource(build_resource(config));

    let provider = match config.metrics_exporter {
        MetricsExporter::Stdout => builder
            .with_periodic_exporter(opentelemetry_stdout::MetricExporter::default())
            .build(),
        MetricsExporter::Otlp => match &config.collector_endpoint {
            Some(endpoint) => {
                let channel = build_collector_channel(endpoint)?;
                let exporter = opentelemetry_otlp::MetricExporter::builder()
                    .with_tonic()
                    .with_channel(channel)
                    .build()
                    .map_err(|e: opentelemetry_otlp::ExporterBuildError| {
                        TelemetryError::Exporter(e.to_string())
                    })?;

                builder.with_periodic_exporter(exporter).build()
            }
            None => builder.build(),
        },
    };

    Ok(provider)
}
