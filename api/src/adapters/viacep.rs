//! ViaCEP geocoding client implementation

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::cep::Cep;
use crate::domain::ports::{GeocodeClient, GeocodeLookup};
use crate::error::ProviderError;

/// Implementation of the geocoding client against a ViaCEP-shaped API.
pub struct ViaCepClient {
    http: Client,
    base_url: String,
}

impl ViaCepClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl GeocodeClient for ViaCepClient {
    async fn lookup(&self, cep: &Cep) -> Result<GeocodeLookup, ProviderError> {
        let url = format!("{}/ws/{}/json/", self.base_url, cep.as_str());
        tracing::debug!(%url, "lookup: fetching");

        let response = self.http.get(&url).send().await?;
        tracing::debug!(status = %response.status(), "lookup: provider answered");

        response
            .json()
            .await
            .map_err(|e| ProviderError::Deserialization(e.to_string()))
    }
}
