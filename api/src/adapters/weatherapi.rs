//! WeatherAPI current-conditions client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::domain::ports::{CurrentWeather, WeatherClient};
use crate::error::ProviderError;

/// Implementation of the weather client against a WeatherAPI-shaped API.
pub struct WeatherApiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

/// Response envelope from the provider; only the current block matters.
#[derive(Deserialize)]
struct CurrentResponse {
    current: CurrentWeather,
}

impl WeatherApiClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl WeatherClient for WeatherApiClient {
    async fn current(&self, city: &str) -> Result<CurrentWeather, ProviderError> {
        let url = format!(
            "{}/v1/current.json?key={}&q={}",
            self.base_url,
            self.api_key,
            encode(city)
        );
        // The URL carries the API key, so log the city only
        tracing::debug!(city, "current: fetching");

        let response = self.http.get(&url).send().await?;
        tracing::debug!(status = %response.status(), "current: provider answered");

        let decoded: CurrentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Deserialization(e.to_string()))?;

        Ok(decoded.current)
    }
}
