//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod weather;

pub use weather::{get_weather_by_cep, post_weather, CepRequest};
