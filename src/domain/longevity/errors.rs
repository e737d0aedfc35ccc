//! Estimation error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised by the estimation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimationError {
    #[error("Invalid date: {year:04}-{month:02}-{day:02} {hour:02}:00 is not a valid calendar timestamp")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
    },

    #[error("Birth moment lies after the current moment")]
    BirthInFuture,

    #[error("Invalid health profile: {0}")]
    InvalidProfile(String),
}

impl EstimationError {
    /// Creates an invalid profile error.
    pub fn invalid_profile(reason: impl Into<String>) -> Self {
        EstimationError::InvalidProfile(reason.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EstimationError::InvalidDate { .. } => ErrorCode::InvalidDate,
            EstimationError::BirthInFuture => ErrorCode::BirthInFuture,
            EstimationError::InvalidProfile(_) => ErrorCode::InvalidProfile,
        }
    }
}

impl From<EstimationError> for DomainError {
    fn from(err: EstimationError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            EstimationError::InvalidDate {
                year,
                month,
                day,
                hour,
            } => domain
                .with_detail("field", "birth")
                .with_detail("year", year)
                .with_detail("month", month)
                .with_detail("day", day)
                .with_detail("hour", hour),
            EstimationError::BirthInFuture => domain.with_detail("field", "birth"),
            EstimationError::InvalidProfile(reason) => domain
                .with_detail("field", "profile")
                .with_detail("reason", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_displays_all_fields() {
        let err = EstimationError::InvalidDate {
            year: 1990,
            month: 13,
            day: 1,
            hour: 0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid date: 1990-13-01 00:00 is not a valid calendar timestamp"
        );
    }

    #[test]
    fn codes_match_variants() {
        assert_eq!(EstimationError::BirthInFuture.code(), ErrorCode::BirthInFuture);
        assert_eq!(
            EstimationError::invalid_profile("x").code(),
            ErrorCode::InvalidProfile
        );
    }

    #[test]
    fn converts_into_domain_error() {
        let err: DomainError = EstimationError::invalid_profile("bad smoking level").into();
        assert_eq!(err.code, ErrorCode::InvalidProfile);
        assert_eq!(err.message, "Invalid health profile: bad smoking level");
        assert_eq!(err.details.get("field").map(String::as_str), Some("profile"));
        assert_eq!(
            err.details.get("reason").map(String::as_str),
            Some("bad smoking level")
        );
    }

    #[test]
    fn invalid_date_details_carry_every_field() {
        let err: DomainError = EstimationError::InvalidDate {
            year: 1990,
            month: 2,
            day: 30,
            hour: 7,
        }
        .into();

        assert_eq!(err.code, ErrorCode::InvalidDate);
        assert_eq!(err.details.get("field").map(String::as_str), Some("birth"));
        assert_eq!(err.details.get("day").map(String::as_str), Some("30"));
        assert_eq!(err.details.get("hour").map(String::as_str), Some("7"));
    }
}
