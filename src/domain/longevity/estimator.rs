//! Life Expectancy Estimator - combines the pipeline stages.

use serde::Serialize;

use super::age::{calculate_age, ElapsedAge};
use super::baseline::resolve_country;
use super::health_profile::HealthProfile;
use super::health_score::{health_contributions, FactorContribution};
use super::medical_advances::{medical_advances_bonus, AppliedMilestone};
use super::outlook::HealthOutlook;
use super::{BirthMoment, EstimationError};
use crate::domain::foundation::Timestamp;

/// Age after which the senior survivorship bonus starts.
pub const SENIOR_AGE: u32 = 65;
pub const SENIOR_BONUS_PER_YEAR: f64 = 0.1;
pub const MAX_SENIOR_BONUS: f64 = 2.0;

/// Full output of one estimation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimationResult {
    pub birth: BirthMoment,
    pub elapsed: ElapsedAge,
    pub country: &'static str,
    pub base_expectancy: f64,
    pub age_bonus: f64,
    pub health_score: i32,
    pub contributions: Vec<FactorContribution>,
    pub medical_bonus: f64,
    pub milestones: Vec<AppliedMilestone>,
    pub adjusted_expectancy: f64,
    pub remaining_years: f64,
    pub projected_death_year: i32,
    pub outlook: HealthOutlook,
}

/// Bonus for having already survived past 65: 0.1 per year, at most 2.
pub fn age_bonus(age_years: u32) -> f64 {
    if age_years > SENIOR_AGE {
        (f64::from(age_years - SENIOR_AGE) * SENIOR_BONUS_PER_YEAR).min(MAX_SENIOR_BONUS)
    } else {
        0.0
    }
}

/// Sum of all components, floored at `age + 1`.
pub fn adjusted_expectancy(
    age_years: u32,
    base: f64,
    age_bonus: f64,
    health_score: i32,
    medical_bonus: f64,
) -> f64 {
    let raw = base + age_bonus + f64::from(health_score) + medical_bonus;
    raw.max(f64::from(age_years) + 1.0)
}

/// Years left, never negative.
pub fn remaining_years(adjusted_expectancy: f64, age_years: u32) -> f64 {
    (adjusted_expectancy - f64::from(age_years)).max(0.0)
}

/// Stateless estimation pipeline.
pub struct LifeExpectancyEstimator;

impl LifeExpectancyEstimator {
    /// Estimates remaining lifespan for `birth` and `profile` as of `now`.
    ///
    /// Deterministic: identical arguments give identical results.
    ///
    /// # Errors
    ///
    /// Returns `EstimationError::BirthInFuture` when `birth` is after `now`.
    pub fn estimate(
        birth: &BirthMoment,
        profile: &HealthProfile,
        now: &Timestamp,
    ) -> Result<EstimationResult, EstimationError> {
        let elapsed = calculate_age(birth, now)?;
        let age = elapsed.years;
        let current_year = now.year();

        let baseline = resolve_country(&profile.country);
        let base_expectancy = baseline.for_gender(profile.gender);
        let age_bonus = age_bonus(age);

        let contributions = health_contributions(profile);
        let health_score: i32 = contributions.iter().map(|c| c.years).sum();

        let preliminary =
            (base_expectancy + age_bonus + f64::from(health_score) - f64::from(age)).max(0.0);
        let advances = medical_advances_bonus(age, preliminary, current_year);

        let adjusted =
            adjusted_expectancy(age, base_expectancy, age_bonus, health_score, advances.total);
        let remaining = remaining_years(adjusted, age);

        tracing::debug!(
            age,
            country = baseline.country,
            base_expectancy,
            age_bonus,
            health_score,
            medical_bonus = advances.total,
            remaining,
            "Estimated life expectancy"
        );

        Ok(EstimationResult {
            birth: *birth,
            elapsed,
            country: baseline.country,
            base_expectancy,
            age_bonus,
            health_score,
            contributions,
            medical_bonus: advances.total,
            milestones: advances.applied,
            adjusted_expectancy: adjusted,
            remaining_years: remaining,
            projected_death_year: current_year + remaining.floor() as i32,
            outlook: HealthOutlook::from_score(health_score),
        })
    }
}
