//! CEP Weather API Server
//!
//! Resolves an 8-digit postal code (CEP) to current weather by chaining a
//! geocoding provider (ViaCEP) and a weather provider (WeatherAPI).
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{TracingSpans, ViaCepClient, WeatherApiClient};
use app::WeatherService;
use config::Config;
use domain::ports::{GeocodeClient, RequestTracer, WeatherClient};

/// Application state shared across all handlers
pub struct AppState<G, W, T>
where
    G: GeocodeClient,
    W: WeatherClient,
    T: RequestTracer,
{
    pub weather_service: Arc<WeatherService<G, W, T>>,
}

// Not derived: that would demand Clone from the port implementations
impl<G, W, T> Clone for AppState<G, W, T>
where
    G: GeocodeClient,
    W: WeatherClient,
    T: RequestTracer,
{
    fn clone(&self) -> Self {
        Self {
            weather_service: Arc::clone(&self.weather_service),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router over any set of port implementations, so tests can
/// stand up the full HTTP surface on mock clients.
pub fn router<G, W, T>(state: AppState<G, W, T>) -> Router
where
    G: GeocodeClient + 'static,
    W: WeatherClient + 'static,
    T: RequestTracer + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/", post(handlers::post_weather::<G, W, T>))
        .route("/:cep", get(handlers::get_weather_by_cep::<G, W, T>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cep_weather_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CEP Weather API...");

    // Load configuration
    let config = Config::from_env();

    // Create adapters
    let geocode = Arc::new(ViaCepClient::new(config.viacep_url.clone()));
    let weather = Arc::new(WeatherApiClient::new(
        config.weather_api_url.clone(),
        config.weather_api_key.clone(),
    ));
    let tracer = Arc::new(TracingSpans);

    // Create app state
    let state = AppState {
        weather_service: Arc::new(WeatherService::new(geocode, weather, tracer)),
    };

    let app = router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

    run_with_deadline(server.into_future(), deadline_signal(), SHUTDOWN_GRACE).await;
}

/// How long in-flight requests get to finish once the shutdown signal
/// arrives, before the server future is dropped outright.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Run the server to completion, but once `signal` fires only wait `grace`
/// longer. Dropping the server future drops any still-running handler
/// futures, which aborts their in-flight downstream calls.
async fn run_with_deadline(
    server: impl Future<Output = std::io::Result<()>>,
    signal: impl Future<Output = ()>,
    grace: Duration,
) {
    tokio::select! {
        result = server => {
            if let Err(err) = result {
                tracing::error!(error = %err, "server error");
            }
        }
        _ = async {
            signal.await;
            tokio::time::sleep(grace).await;
        } => {
            tracing::warn!("shutdown grace period elapsed, aborting in-flight requests");
        }
    }
}

/// Resolves on Ctrl-C; axum then stops accepting, drops in-flight handler
/// futures on disconnect, and lets the rest wind down.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl-C handler");
    tracing::info!("Shutdown signal received");
}

/// Second Ctrl-C listener arming the forced-shutdown deadline; quiet so
/// the graceful path owns the log line.
async fn deadline_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl-C handler");
}
