//! HTTP DTOs for estimation endpoints.
//!
//! Request fields stay loosely typed so that bad dates and unknown labels
//! come back as `INVALID_DATE` / `INVALID_PROFILE` errors instead of generic
//! deserialization failures.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;
use crate::domain::longevity::{BirthMomentParts, EstimationResult, HealthProfileInput};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Web-form submission.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EstimateRequest {
    pub birth: BirthMomentParts,
    #[serde(default)]
    pub profile: HealthProfileInput,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Estimation result plus its rendered text.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateResponse {
    #[serde(flatten)]
    pub result: EstimationResult,
    pub outlook_message: &'static str,
    pub summary: String,
}

/// Countries accepted by the baseline table.
#[derive(Debug, Clone, Serialize)]
pub struct CountriesResponse {
    pub countries: Vec<&'static str>,
    pub default_country: String,
}

/// Liveness probe body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<DomainError> for ErrorResponse {
    fn from(error: DomainError) -> Self {
        let details = (!error.details.is_empty()).then(|| {
            serde_json::Value::Object(
                error
                    .details
                    .into_iter()
                    .map(|(key, value)| (key, serde_json::Value::String(value)))
                    .collect(),
            )
        });

        Self {
            code: error.code.to_string(),
            message: error.message,
            details,
        }
    }
}
