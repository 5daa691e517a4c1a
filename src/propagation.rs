use std::collections::HashMap;

use opentelemetry::propagation::TextMapCompositePropagator;
use opentelemetry::{global, Context};
use opentelemetry_sdk::propagation::{BaggagePropagator, TraceContextPropagator};

/// Composite propagator carrying W3C trace-context and baggage headers.
///
/// Installed as the process-wide default during bootstrap; both formats are
/// written on inject and honored on extract.
pub fn composite_propagator() -> TextMapCompositePropagator {
    TextMapCompositePropagator::new(vec![
        Box::new(TraceContextPropagator::new()),
        Box::new(BaggagePropagator::new()),
    ])
}

/// Inject the given context into a header map via the global propagator.
pub fn inject_context(cx: &Context, carrier: &mut HashMap<String, String>) {
    global::get_text_map_propagator(|propagator| propagator.inject_context(cx, carrier));
}

/// Extract a context from a header map via the global propagator.
pub fn extract_context(carrier: &HashMap<String, String>) -> Context {
    global::get_text_map_propagator(|propagator| propagator.extract(carrier))
}

#[cfg(test)]
mod tests {
    use opentelemetry::baggage::BaggageExt;
    use opentelemetry::trace::{
        SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
    };
    use opentelemetry::KeyValue;

    use super::*;
    use crate::test_support;

    fn remote_context() -> Context {
        let span_context = SpanContext::new(
            TraceId::from_hex("0af7651916cd43dd8448eb211c80319c").unwrap(),
            SpanId::from_hex("b7ad6b7169203331").unwrap(),
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );
        Context::new().with_remote_span_context(span_context)
    }

    #[test]
    fn inject_writes_both_header_formats() {
        let _lock = test_support::global_lock();
        global::set_text_map_propagator(composite_propagator());

        let cx = remote_context().with_baggage(vec![KeyValue::new("tenant", "acme")]);
        let mut carrier = HashMap::new();
        inject_context(&cx, &mut carrier);

        assert_eq!(
            carrier.get("traceparent").map(String::as_str),
            Some("00-0af7651916cd43dd8448eb211c80319c-b7ad6b7169203331-01")
        );
        assert!(carrier
            .get("baggage")
            .is_some_and(|v| v.contains("tenant=acme")));
    }

    #[test]
    fn extract_then_reinject_preserves_trace_identity() {
        let _lock = test_support::global_lock();
        global::set_text_map_propagator(composite_propagator());

        let cx = remote_context().with_baggage(vec![KeyValue::new("tenant", "acme")]);
        let mut first_hop = HashMap::new();
        inject_context(&cx, &mut first_hop);

        let extracted = extract_context(&first_hop);
        assert_eq!(
            extracted.span().span_context().trace_id(),
            TraceId::from_hex("0af7651916cd43dd8448eb211c80319c").unwrap()
        );

        let mut second_hop = HashMap::new();
        inject_context(&extracted, &mut second_hop);
        assert_eq!(first_hop.get("traceparent"), second_hop.get("traceparent"));
        assert!(second_hop
            .get("baggage")
            .is_some_and(|v| v.contains("tenant=acme")));
    }

    #[test]
    fn extract_without_headers_yields_invalid_span_context() {
        let _lock = test_support::global_lock();
        global::set_text_map_propagator(composite_propagator());

        let extracted = extract_context(&HashMap::new());

        assert!(!extracted.span().span_context().is_valid());
    }
}
