//! Shared fixtures for tests

use axum::Router;

use crate::domain::ports::{CurrentWeather, GeocodeLookup};

/// Geocode answer for a code the provider knows.
pub fn sao_paulo_lookup() -> GeocodeLookup {
    GeocodeLookup {
        localidade: "São Paulo".to_string(),
        erro: false,
    }
}

/// Geocode answer for a well-formed code the provider has never heard of.
pub fn not_found_lookup() -> GeocodeLookup {
    GeocodeLookup {
        localidade: String::new(),
        erro: true,
    }
}

/// A pleasant 25 °C.
pub fn mild_weather() -> CurrentWeather {
    CurrentWeather { temp_c: 25.0 }
}

/// Serve a canned provider on an ephemeral local port; returns its base
/// URL. The task is dropped with the runtime at the end of the test.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve upstream");
    });
    format!("http://{addr}")
}
