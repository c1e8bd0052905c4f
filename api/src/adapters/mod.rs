//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod trace;
pub mod viacep;
pub mod weatherapi;

pub use trace::TracingSpans;
pub use viacep::ViaCepClient;
pub use weatherapi::WeatherApiClient;
