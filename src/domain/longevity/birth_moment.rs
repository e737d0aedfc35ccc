//! BirthMoment value object.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::EstimationError;

/// A person's birth, to day and hour precision.
///
/// Always a valid calendar timestamp; construction fails otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "BirthMomentParts", into = "BirthMomentParts")]
pub struct BirthMoment(NaiveDateTime);

impl BirthMoment {
    /// Creates a birth moment from calendar fields.
    ///
    /// # Errors
    ///
    /// Returns `EstimationError::InvalidDate` when the fields do not form a
    /// valid timestamp (month 13, day 32, February 30, hour 24, ...).
    pub fn new(year: i32, month: u32, day: u32, hour: u32) -> Result<Self, EstimationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .map(Self)
            .ok_or(EstimationError::InvalidDate {
                year,
                month,
                day,
                hour,
            })
    }

    /// Returns the birth moment as a naive datetime.
    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }
}

impl fmt::Display for BirthMoment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:00"))
    }
}

/// Wire form of a birth moment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BirthMomentParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
}

impl TryFrom<BirthMomentParts> for BirthMoment {
    type Error = EstimationError;

    fn try_from(parts: BirthMomentParts) -> Result<Self, Self::Error> {
        BirthMoment::new(parts.year, parts.month, parts.day, parts.hour)
    }
}

impl From<BirthMoment> for BirthMomentParts {
    fn from(birth: BirthMoment) -> Self {
        Self {
            year: birth.year(),
            month: birth.month(),
            day: birth.day(),
            hour: birth.hour(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_timestamp() {
        let birth = BirthMoment::new(1990, 6, 15, 14).unwrap();
        assert_eq!(birth.year(), 1990);
        assert_eq!(birth.month(), 6);
        assert_eq!(birth.day(), 15);
        assert_eq!(birth.hour(), 14);
    }

    #[test]
    fn accepts_leap_day() {
        assert!(BirthMoment::new(2000, 2, 29, 0).is_ok());
    }

    #[test]
    fn rejects_month_13() {
        assert!(matches!(
            BirthMoment::new(1990, 13, 1, 0),
            Err(EstimationError::InvalidDate { month: 13, .. })
        ));
    }

    #[test]
    fn rejects_day_32() {
        assert!(BirthMoment::new(1990, 1, 32, 0).is_err());
    }

    #[test]
    fn rejects_february_30() {
        assert!(BirthMoment::new(1990, 2, 30, 0).is_err());
    }

    #[test]
    fn rejects_non_leap_february_29() {
        assert!(BirthMoment::new(1900, 2, 29, 0).is_err());
    }

    #[test]
    fn rejects_hour_24() {
        assert!(matches!(
            BirthMoment::new(1990, 1, 1, 24),
            Err(EstimationError::InvalidDate { hour: 24, .. })
        ));
    }

    #[test]
    fn displays_date_and_hour() {
        let birth = BirthMoment::new(1985, 3, 7, 9).unwrap();
        assert_eq!(birth.to_string(), "1985-03-07 09:00");
    }

    #[test]
    fn deserializes_from_parts() {
        let birth: BirthMoment =
            serde_json::from_str(r#"{"year":1990,"month":6,"day":15,"hour":14}"#).unwrap();
        assert_eq!(birth, BirthMoment::new(1990, 6, 15, 14).unwrap());
    }

    #[test]
    fn deserialization_rejects_invalid_date() {
        let result: Result<BirthMoment, _> =
            serde_json::from_str(r#"{"year":1990,"month":2,"day":30,"hour":0}"#);
        assert!(result.is_err());
    }
}
