//! Geocoding client port
//!
//! Defines the interface for resolving a postal code to a locality via a
//! ViaCEP-shaped provider.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::cep::Cep;
use crate::error::ProviderError;

/// Decoded geocode lookup, exactly as the provider reports it.
///
/// Classification of `erro` / empty `localidade` into a not-found outcome
/// belongs to the orchestrator, not the client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeLookup {
    /// Locality (city) name. The provider omits it for unknown codes.
    #[serde(default)]
    pub localidade: String,
    /// Provider's explicit "no such code" flag, absent on success.
    #[serde(default)]
    pub erro: bool,
}

/// Port trait for the geocoding provider.
#[async_trait]
pub trait GeocodeClient: Send + Sync {
    /// Look up a validated postal code. Errors cover transport failures
    /// and undecodable bodies only; a known-missing code is a successful
    /// lookup with the `erro` flag set.
    async fn lookup(&self, cep: &Cep) -> Result<GeocodeLookup, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_success_payload_without_erro_field() {
        let lookup: GeocodeLookup =
            serde_json::from_str(r#"{"localidade": "São Paulo"}"#).unwrap();
        assert_eq!(lookup.localidade, "São Paulo");
        assert!(!lookup.erro);
    }

    #[test]
    fn decodes_not_found_payload_without_localidade() {
        let lookup: GeocodeLookup = serde_json::from_str(r#"{"erro": true}"#).unwrap();
        assert!(lookup.erro);
        assert!(lookup.localidade.is_empty());
    }
}
