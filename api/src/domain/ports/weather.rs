//! Weather client port
//!
//! Defines the interface for fetching current conditions for a locality
//! from a WeatherAPI-shaped provider.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::ProviderError;

/// Current conditions for one locality. The provider nests this under a
/// `current` object; adapters flatten that away.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub temp_c: f64,
}

/// Port trait for the weather provider.
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Fetch current conditions for a locality name. The name is passed
    /// as-is; implementations handle URL escaping. No bounds validation
    /// is applied to the reading.
    async fn current(&self, city: &str) -> Result<CurrentWeather, ProviderError>;
}
