//! Application layer
//!
//! Contains the orchestration use case coordinating the domain types and
//! the downstream provider ports.

pub mod weather_service;

pub use weather_service::WeatherService;
