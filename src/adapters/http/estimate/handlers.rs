//! HTTP handlers for estimation endpoints.
//!
//! These handlers connect Axum routes to the estimation command handler.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::presenter::render_report;
use crate::application::{EstimateLifeExpectancyCommand, EstimateLifeExpectancyHandler};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::longevity::{supported_countries, BirthMoment, EstimationError};

use super::dto::{
    CountriesResponse, ErrorResponse, EstimateRequest, EstimateResponse, HealthResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Estimation API error that implements IntoResponse.
#[derive(Debug)]
pub enum EstimateApiError {
    BadRequest(DomainError),
}

impl IntoResponse for EstimateApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            EstimateApiError::BadRequest(error) => {
                tracing::warn!(
                    code = %error.code,
                    "Rejected estimation request: {}",
                    error.message
                );
                (StatusCode::BAD_REQUEST, ErrorResponse::from(error))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<JsonRejection> for EstimateApiError {
    fn from(rejection: JsonRejection) -> Self {
        EstimateApiError::BadRequest(DomainError::new(
            ErrorCode::BadRequest,
            rejection.body_text(),
        ))
    }
}

impl From<EstimationError> for EstimateApiError {
    fn from(error: EstimationError) -> Self {
        EstimateApiError::BadRequest(error.into())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for estimation endpoints.
#[derive(Clone)]
pub struct EstimateAppState {
    pub handler: EstimateLifeExpectancyHandler,
    pub default_country: Arc<str>,
}

impl EstimateAppState {
    pub fn new(
        handler: EstimateLifeExpectancyHandler,
        default_country: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            handler,
            default_country: default_country.into(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/estimate
///
/// Validates the submitted form and returns the estimate.
pub async fn estimate(
    State(state): State<EstimateAppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Result<Json<EstimateResponse>, EstimateApiError> {
    let Json(req) = payload?;
    let birth = BirthMoment::try_from(req.birth)?;
    let profile = req.profile.into_profile(&state.default_country)?;

    let result = state
        .handler
        .handle(EstimateLifeExpectancyCommand { birth, profile })?;

    Ok(Json(EstimateResponse {
        outlook_message: result.outlook.message(),
        summary: render_report(&result),
        result,
    }))
}

/// GET /api/countries
pub async fn list_countries(State(state): State<EstimateAppState>) -> Json<CountriesResponse> {
    Json(CountriesResponse {
        countries: supported_countries(),
        default_country: state.default_country.to_string(),
    })
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
