//! Estimation HTTP adapter module.
//!
//! The web-form front end:
//! - `GET /health` - Liveness probe
//! - `GET /api/countries` - Supported countries
//! - `POST /api/estimate` - Run one estimation

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{CountriesResponse, ErrorResponse, EstimateRequest, EstimateResponse};
pub use handlers::{EstimateApiError, EstimateAppState};
pub use routes::{estimate_router, estimate_routes};
