//! Unified error types for the CEP weather API
//!
//! Two layers, mirroring the request flow:
//! - `ProviderError`: failures talking to a downstream provider
//! - `AppError`: request outcomes, mapped to HTTP responses

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Downstream provider failures. Transport and decode problems are kept
/// apart for logs; both surface to the caller as a server error.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("could not decode provider response: {0}")]
    Deserialization(String),
}

/// Which downstream dependency a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Geocode,
    Weather,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Geocode => f.write_str("geocode"),
            Stage::Weather => f.write_str("weather"),
        }
    }
}

/// Application layer errors - the terminal outcomes of one request.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input was not an 8-digit postal code. No provider was contacted.
    #[error("invalid zipcode")]
    InvalidCep,

    /// The geocode provider answered but knows no such code.
    #[error("can not find zipcode")]
    CepNotFound,

    /// Transport or decode failure at one of the downstream stages. The
    /// stage reaches logs and spans, never the response body.
    #[error("{stage} stage failed: {source}")]
    Upstream {
        stage: Stage,
        #[source]
        source: ProviderError,
    },
}

impl AppError {
    pub fn stage(&self) -> Option<Stage> {
        match self {
            AppError::Upstream { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::InvalidCep => (StatusCode::UNPROCESSABLE_ENTITY, "invalid zipcode\n"),
            AppError::CepNotFound => (StatusCode::NOT_FOUND, "can not find zipcode\n"),
            AppError::Upstream { stage, source } => {
                tracing::error!(%stage, error = %source, "upstream provider failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error\n")
            }
        };

        (status, body).into_response()
    }
}
