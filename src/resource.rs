use opentelemetry::KeyValue;
use opentelemetry_sdk::Resource;
use opentelemetry_semantic_conventions::resource::{SERVICE_NAME, SERVICE_VERSION};
use opentelemetry_semantic_conventions::SCHEMA_URL;

use crate::config::TelemetryConfig;

/// Identifying attributes attached to every emitted trace and metric
pub fn base_attributes(config: &TelemetryConfig) -> Vec<KeyValue> {
    vec![
        KeyValue::new(SERVICE_NAME, config.service_name.clone()),
        KeyValue::new(SERVICE_VERSION, config.service_version.clone()),
    ]
}

/// Build the resource descriptor for this process.
///
/// Base attributes are recorded under the semantic-convention schema URL and
/// merged with the SDK's default attributes (telemetry SDK identification,
/// environment-derived entries), with the config taking precedence.
pub fn build_resource(config: &TelemetryConfig) -> Resource {
    Resource::builder()
        .with_schema_url(base_attributes(config), SCHEMA_URL)
        .build()
}

/// Build the resource with additional caller-supplied attributes
pub fn build_resource_with(config: &TelemetryConfig, additional: Vec<KeyValue>) -> Resource {
    let mut attrs = base_attributes(config);
    attrs.extend(additional);
    Resource::builder().with_schema_url(attrs, SCHEMA_URL).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> TelemetryConfig {
        TelemetryConfig::new("test-service", "1.2.3")
    }

    #[test]
    fn base_attributes_contains_service_name() {
        let attrs = base_attributes(&test_config());

        let has_service_name = attrs
            .iter()
            .any(|kv| kv.key.as_str() == SERVICE_NAME && kv.value.as_str() == "test-service");

        assert!(has_service_name);
    }

    #[test]
    fn base_attributes_contains_service_version() {
        let attrs = base_attributes(&test_config());

        let has_version = attrs
            .iter()
            .any(|kv| kv.key.as_str() == SERVICE_VERSION && kv.value.as_str() == "1.2.3");

        assert!(has_version);
    }

    #[test]
    fn build_resource_records_service_name() {
        let resource = build_resource(&test_config());

        let has_service_name = resource
            .iter()
            .any(|(k, v)| k.as_str() == SERVICE_NAME && v.as_str() == "test-service");

        assert!(has_service_name);
    }

    #[test]
    fn build_resource_carries_schema_url() {
        let resource = build_resource(&test_config());

        assert_eq!(resource.schema_url(), Some(SCHEMA_URL));
    }

    #[test]
    fn build_resource_with_includes_additional_attrs() {
        let additional = vec![
            KeyValue::new("deployment.environment", "staging"),
            KeyValue::new("custom.attr", "value"),
        ];

        let resource = build_resource_with(&test_config(), additional);

        let has_custom = resource
            .iter()
            .any(|(k, v)| k.as_str() == "custom.attr" && v.as_str() == "value");

        assert!(has_custom);
        assert!(!resource.is_empty());
    }
}
