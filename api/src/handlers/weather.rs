//! Weather lookup handlers
//!
//! Two inbound shapes for the same orchestration: the postal code either
//! path-embedded or wrapped in a JSON body. Extraction of the code from
//! the request is all that happens here; the service owns the rest.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::domain::ports::{GeocodeClient, RequestTracer, WeatherClient};
use crate::domain::temperature::WeatherReport;
use crate::error::AppError;
use crate::AppState;

/// JSON body shape for `POST /`.
#[derive(Debug, Deserialize)]
pub struct CepRequest {
    pub cep: String,
}

/// GET /:cep
pub async fn get_weather_by_cep<G, W, T>(
    State(state): State<AppState<G, W, T>>,
    Path(cep): Path<String>,
) -> Result<Json<WeatherReport>, AppError>
where
    G: GeocodeClient,
    W: WeatherClient,
    T: RequestTracer,
{
    let report = state.weather_service.report_for(&cep).await?;
    Ok(Json(report))
}

/// POST / with `{"cep": "<8 digits>"}`
pub async fn post_weather<G, W, T>(
    State(state): State<AppState<G, W, T>>,
    Json(body): Json<CepRequest>,
) -> Result<Json<WeatherReport>, AppError>
where
    G: GeocodeClient,
    W: WeatherClient,
    T: RequestTracer,
{
    let report = state.weather_service.report_for(&body.cep).await?;
    Ok(Json(report))
}
