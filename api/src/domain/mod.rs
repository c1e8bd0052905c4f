//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `cep`: postal code validation
//! - `temperature`: unit conversion and the assembled weather report
//! - `ports`: trait definitions for external dependencies

pub mod cep;
pub mod ports;
pub mod temperature;
