//! Weather orchestration service
//!
//! Sequences one request end to end: validate the postal code, resolve it
//! to a locality, resolve the locality to a Celsius reading, convert units
//! and assemble the report. The two downstream calls are strictly ordered
//! (the weather query needs the locality) and each one runs inside its own
//! child span under the request-scoped parent span.
//!
//! No retries, no caching: each provider is called at most once, and every
//! failure is terminal for the request.

use std::sync::Arc;

use tracing::Instrument;

use crate::domain::cep::Cep;
use crate::domain::ports::{span_names, GeocodeClient, RequestTracer, WeatherClient};
use crate::domain::temperature::WeatherReport;
use crate::error::{AppError, Stage};

/// Service orchestrating the geocode and weather lookups.
pub struct WeatherService<G, W, T>
where
    G: GeocodeClient,
    W: WeatherClient,
    T: RequestTracer,
{
    geocode: Arc<G>,
    weather: Arc<W>,
    tracer: Arc<T>,
}

impl<G, W, T> WeatherService<G, W, T>
where
    G: GeocodeClient,
    W: WeatherClient,
    T: RequestTracer,
{
    pub fn new(geocode: Arc<G>, weather: Arc<W>, tracer: Arc<T>) -> Self {
        Self {
            geocode,
            weather,
            tracer,
        }
    }

    /// Resolve a candidate postal code to a full weather report.
    ///
    /// Validation happens before any outbound call, and a geocode miss or
    /// failure means the weather provider is never contacted. The parent
    /// span closes on every exit, early rejections included.
    pub async fn report_for(&self, raw_cep: &str) -> Result<WeatherReport, AppError> {
        let span = self.tracer.start_span(span_names::ORCHESTRATE);
        async {
            let cep = Cep::parse(raw_cep).map_err(|_| AppError::InvalidCep)?;
            tracing::debug!(%cep, "postal code accepted");

            let city = self.resolve_locality(&cep).await?;
            let current = self.resolve_temperature(&city).await?;

            let report = WeatherReport::from_celsius(city, current);
            tracing::info!(%cep, city = %report.city, temp_c = report.temp_c, "report assembled");
            Ok(report)
        }
        .instrument(span)
        .await
    }

    /// Geocode stage: one provider call, then not-found classification.
    async fn resolve_locality(&self, cep: &Cep) -> Result<String, AppError> {
        let span = self.tracer.start_span(span_names::GEOCODE);
        let lookup = self
            .geocode
            .lookup(cep)
            .instrument(span)
            .await
            .map_err(|source| AppError::Upstream {
                stage: Stage::Geocode,
                source,
            })?;

        if lookup.erro || lookup.localidade.is_empty() {
            tracing::debug!(%cep, "geocode provider knows no such code");
            return Err(AppError::CepNotFound);
        }

        // The locality goes out exactly as the provider spelled it
        Ok(lookup.localidade)
    }

    /// Weather stage: one provider call, reading taken as-is.
    async fn resolve_temperature(&self, city: &str) -> Result<f64, AppError> {
        let span = self.tracer.start_span(span_names::WEATHER);
        let current = self
            .weather
            .current(city)
            .instrument(span)
            .await
            .map_err(|source| AppError::Upstream {
                stage: Stage::Weather,
                source,
            })?;

        Ok(current.temp_c)
    }
}
