//! tracing-backed span factory

use tracing::Span;

use crate::domain::ports::{span_names, RequestTracer};

/// Production [`RequestTracer`] backed by the `tracing` crate.
///
/// Spans nest under whatever span is current when the instrumented future
/// first polls, so the orchestrator's spans land under the request span
/// installed by `TraceLayer` — which is also where an exporter layer would
/// attach any incoming trace context.
#[derive(Clone, Copy, Default)]
pub struct TracingSpans;

impl RequestTracer for TracingSpans {
    fn start_span(&self, name: &'static str) -> Span {
        // span! needs a literal name, so the known names are matched out
        match name {
            span_names::ORCHESTRATE => tracing::info_span!("orchestrate_weather"),
            span_names::GEOCODE => tracing::info_span!("call_viacep"),
            span_names::WEATHER => tracing::info_span!("call_weatherapi"),
            other => tracing::info_span!("operation", name = other),
        }
    }
}
