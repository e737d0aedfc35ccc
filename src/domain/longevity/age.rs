//! Age Calculator - elapsed time from birth using calendar arithmetic.

use chrono::{Datelike, Months, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{BirthMoment, EstimationError};
use crate::domain::foundation::Timestamp;

/// Time elapsed since birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElapsedAge {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl ElapsedAge {
    /// Total whole months lived.
    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }
}

/// Computes the years, months, and days elapsed between `birth` and `now`.
///
/// Whole months are counted by stepping the birth moment forward one
/// calendar month at a time (a day past the end of a shorter month clamps
/// to that month's last day). The day remainder is measured from the last
/// whole-month boundary.
///
/// # Errors
///
/// Returns `EstimationError::BirthInFuture` if `birth` is after `now`.
pub fn calculate_age(birth: &BirthMoment, now: &Timestamp) -> Result<ElapsedAge, EstimationError> {
    let start = birth.as_naive();
    let end = now.naive_utc();
    if start > end {
        return Err(EstimationError::BirthInFuture);
    }

    let mut months = month_span(start, end);
    let mut boundary = add_months(start, months);
    while boundary > end && months > 0 {
        months -= 1;
        boundary = add_months(start, months);
    }

    let days = (end - boundary).num_days() as u32;

    Ok(ElapsedAge {
        years: months / 12,
        months: months % 12,
        days,
    })
}

/// Calendar month difference ignoring the day of month.
fn month_span(start: NaiveDateTime, end: NaiveDateTime) -> u32 {
    let span = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    span.max(0) as u32
}

fn add_months(start: NaiveDateTime, months: u32) -> NaiveDateTime {
    // Only overflows beyond year 262143, which a valid `now` never reaches.
    start
        .checked_add_months(Months::new(months))
        .unwrap_or(NaiveDateTime::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now(year: i32, month: u32, day: u32, hour: u32) -> Timestamp {
        Timestamp::from_naive_utc(
            NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
        )
    }

    fn birth(year: i32, month: u32, day: u32, hour: u32) -> BirthMoment {
        BirthMoment::new(year, month, day, hour).unwrap()
    }

    #[test]
    fn thirty_years_two_months_ten_days() {
        let age = calculate_age(&birth(1994, 3, 10, 12), &now(2024, 5, 20, 12)).unwrap();
        assert_eq!(
            age,
            ElapsedAge {
                years: 30,
                months: 2,
                days: 10
            }
        );
    }

    #[test]
    fn exact_birthday_has_zero_remainder() {
        let age = calculate_age(&birth(2000, 7, 4, 8), &now(2025, 7, 4, 8)).unwrap();
        assert_eq!((age.years, age.months, age.days), (25, 0, 0));
    }

    #[test]
    fn day_before_birthday_is_previous_year() {
        let age = calculate_age(&birth(2000, 7, 4, 0), &now(2025, 7, 3, 0)).unwrap();
        assert_eq!(age.years, 24);
        assert_eq!(age.months, 11);
        assert_eq!(age.days, 29);
    }

    #[test]
    fn hour_not_yet_reached_does_not_complete_month() {
        let age = calculate_age(&birth(2000, 1, 15, 18), &now(2000, 2, 15, 6)).unwrap();
        assert_eq!((age.years, age.months), (0, 0));
        assert_eq!(age.days, 30);
    }

    #[test]
    fn end_of_month_birth_clamps_in_short_month() {
        // Jan 31 + 1 month lands on Feb 29 in a leap year.
        let age = calculate_age(&birth(2024, 1, 31, 0), &now(2024, 3, 1, 0)).unwrap();
        assert_eq!((age.years, age.months, age.days), (0, 1, 1));
    }

    #[test]
    fn leap_day_birth_counts_years_in_non_leap_years() {
        let age = calculate_age(&birth(2000, 2, 29, 0), &now(2001, 3, 1, 0)).unwrap();
        assert_eq!(age.years, 1);
        assert_eq!(age.months, 0);
        assert_eq!(age.days, 1);
    }

    #[test]
    fn born_now_is_zero() {
        let age = calculate_age(&birth(2024, 5, 20, 12), &now(2024, 5, 20, 12)).unwrap();
        assert_eq!(age.total_months(), 0);
        assert_eq!(age.days, 0);
    }

    #[test]
    fn future_birth_is_rejected() {
        let result = calculate_age(&birth(2030, 1, 1, 0), &now(2024, 1, 1, 0));
        assert_eq!(result, Err(EstimationError::BirthInFuture));
    }
}
