//! Mock implementations of port traits
//!
//! Configured with one canned answer each, repeatable across calls so
//! idempotence can be exercised. Every mock counts its invocations; the
//! weather mock additionally captures the locality it was handed.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::Span;

use crate::domain::cep::Cep;
use crate::domain::ports::{
    CurrentWeather, GeocodeClient, GeocodeLookup, RequestTracer, WeatherClient,
};
use crate::error::ProviderError;

// ============================================================================
// Geocode client mock
// ============================================================================

pub struct MockGeocodeClient {
    // Err holds a message turned into a deserialization failure on call
    lookup: Result<GeocodeLookup, String>,
    calls: AtomicUsize,
}

impl MockGeocodeClient {
    pub fn returning(lookup: GeocodeLookup) -> Self {
        Self {
            lookup: Ok(lookup),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            lookup: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GeocodeClient for MockGeocodeClient {
    async fn lookup(&self, _cep: &Cep) -> Result<GeocodeLookup, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.lookup
            .clone()
            .map_err(ProviderError::Deserialization)
    }
}

// ============================================================================
// Weather client mock
// ============================================================================

pub struct MockWeatherClient {
    current: Result<CurrentWeather, String>,
    calls: AtomicUsize,
    last_city: Mutex<Option<String>>,
}

impl MockWeatherClient {
    pub fn returning(current: CurrentWeather) -> Self {
        Self {
            current: Ok(current),
            calls: AtomicUsize::new(0),
            last_city: Mutex::new(None),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            current: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            last_city: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The locality the orchestrator passed on the most recent call.
    pub fn last_city(&self) -> Option<String> {
        self.last_city.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherClient for MockWeatherClient {
    async fn current(&self, city: &str) -> Result<CurrentWeather, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_city.lock().unwrap() = Some(city.to_string());
        self.current
            .clone()
            .map_err(ProviderError::Deserialization)
    }
}

// ============================================================================
// Tracers
// ============================================================================

/// Records every span name handed out, in order. The spans themselves are
/// disabled, so nothing needs a subscriber.
#[derive(Default)]
pub struct RecordingTracer {
    started: Mutex<Vec<&'static str>>,
}

impl RecordingTracer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started(&self) -> Vec<&'static str> {
        self.started.lock().unwrap().clone()
    }
}

impl RequestTracer for RecordingTracer {
    fn start_span(&self, name: &'static str) -> Span {
        self.started.lock().unwrap().push(name);
        Span::none()
    }
}

/// Tracer for tests that do not care about spans at all.
#[derive(Clone, Copy, Default)]
pub struct NoopTracer;

impl RequestTracer for NoopTracer {
    fn start_span(&self, _name: &'static str) -> Span {
        Span::none()
    }
}
