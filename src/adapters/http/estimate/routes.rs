//! Axum router configuration for estimation endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{estimate, health, list_countries, EstimateAppState};

/// Create the estimation API router.
///
/// # Routes
///
/// - `GET /health` - Liveness probe
/// - `GET /api/countries` - Countries in the baseline table
/// - `POST /api/estimate` - Estimate remaining lifespan from a form submission
pub fn estimate_routes() -> Router<EstimateAppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/countries", get(list_countries))
        .route("/api/estimate", post(estimate))
}

/// Create the estimation router with its state attached.
pub fn estimate_router(state: EstimateAppState) -> Router {
    estimate_routes().with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::application::EstimateLifeExpectancyHandler;
    use crate::domain::foundation::Timestamp;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::NaiveDate;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> EstimateAppState {
        let now = Timestamp::from_naive_utc(
            NaiveDate::from_ymd_opt(2024, 5, 20)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        );
        let handler = EstimateLifeExpectancyHandler::new(Arc::new(FixedClock::new(now)));
        EstimateAppState::new(handler, "World")
    }

    async fn post_json(body: Value) -> (StatusCode, Value) {
        let response = estimate_router(test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/estimate")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let response = estimate_router(test_state())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn countries_lists_table() {
        let response = estimate_router(test_state())
            .oneshot(
                Request::builder()
                    .uri("/api/countries")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["default_country"], "World");
        assert!(body["countries"]
            .as_array()
            .unwrap()
            .contains(&json!("Brazil")));
    }

    #[tokio::test]
    async fn estimate_returns_result() {
        let (status, body) = post_json(json!({
            "birth": {"year": 1994, "month": 3, "day": 10, "hour": 12},
            "profile": {
                "smoking": true,
                "smoking_intensity": "heavy",
                "gender": "female",
                "country": "Brazil"
            }
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["elapsed"]["years"], 30);
        assert_eq!(body["elapsed"]["months"], 2);
        assert_eq!(body["elapsed"]["days"], 10);
        assert_eq!(body["base_expectancy"], 79.9);
        assert_eq!(body["health_score"], -12);
        assert_eq!(body["outlook"], "critical");
        assert!(body["summary"]
            .as_str()
            .unwrap()
            .contains("You have lived 30 years"));
    }

    #[tokio::test]
    async fn invalid_date_is_bad_request() {
        let (status, body) = post_json(json!({
            "birth": {"year": 1990, "month": 13, "day": 1, "hour": 0}
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_DATE");
        assert_eq!(body["details"]["field"], "birth");
        assert_eq!(body["details"]["month"], "13");
    }

    #[tokio::test]
    async fn future_birth_is_bad_request() {
        let (status, body) = post_json(json!({
            "birth": {"year": 2030, "month": 1, "day": 1, "hour": 0}
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BIRTH_IN_FUTURE");
        assert_eq!(body["details"]["field"], "birth");
    }

    #[tokio::test]
    async fn unknown_label_is_invalid_profile() {
        let (status, body) = post_json(json!({
            "birth": {"year": 1990, "month": 1, "day": 1, "hour": 0},
            "profile": {"regular_exercise": true, "exercise_intensity": "extreme"}
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_PROFILE");
    }

    #[tokio::test]
    async fn refinement_without_flag_is_invalid_profile() {
        let (status, body) = post_json(json!({
            "birth": {"year": 1990, "month": 1, "day": 1, "hour": 0},
            "profile": {"diet_quality": "excellent"}
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_PROFILE");
    }
}
