//! Span-factory port
//!
//! Tracing is injected as an explicit capability instead of read from
//! global provider state, so tests can substitute a recording or no-op
//! factory without touching a subscriber.

use tracing::Span;

/// Names of the spans the orchestrator opens.
pub mod span_names {
    /// Parent span covering one whole request, open from validation
    /// through response assembly.
    pub const ORCHESTRATE: &str = "orchestrate_weather";
    /// Child span bracketing the geocode provider call.
    pub const GEOCODE: &str = "call_viacep";
    /// Child span bracketing the weather provider call.
    pub const WEATHER: &str = "call_weatherapi";
}

/// Port trait for scoped span creation.
pub trait RequestTracer: Send + Sync {
    /// Start a span for one unit of work. The span closes when the last
    /// handle to it is dropped, so attaching it to a future with
    /// `Instrument` guarantees closure on every exit path.
    fn start_span(&self, name: &'static str) -> Span;
}
