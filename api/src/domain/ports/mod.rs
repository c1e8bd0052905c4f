//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod geocode;
pub mod tracer;
pub mod weather;

pub use geocode::{GeocodeClient, GeocodeLookup};
pub use tracer::{span_names, RequestTracer};
pub use weather::{CurrentWeather, WeatherClient};
