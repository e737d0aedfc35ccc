//! Longevity Module - Pure life expectancy estimation.
//!
//! # Components
//!
//! - `calculate_age` - Calendar-correct years/months/days since birth
//! - `baseline_expectancy` - Country/gender reference figures
//! - `health_score` - Additive lifestyle adjustment
//! - `medical_advances_bonus` - Speculative gain from future breakthroughs
//! - `LifeExpectancyEstimator` - Combines the above into an `EstimationResult`
//! - `HealthOutlook` - Qualitative banner bucketed from the health score
//!
//! All functions are pure. "Now" is always an explicit argument, so results
//! depend only on the inputs.

mod age;
mod baseline;
mod birth_moment;
mod errors;
mod estimator;
mod health_profile;
mod health_score;
pub mod macros;
mod medical_advances;
mod outlook;

pub use age::{calculate_age, ElapsedAge};
pub use baseline::{
    baseline_expectancy, resolve_country, supported_countries, BaselineEntry, Gender,
    FALLBACK_COUNTRY,
};
pub use birth_moment::{BirthMoment, BirthMomentParts};
pub use errors::EstimationError;
pub use estimator::{
    adjusted_expectancy, age_bonus, remaining_years, EstimationResult, LifeExpectancyEstimator,
};
pub use health_profile::{
    AlcoholLevel, BmiCategory, DietQuality, ExerciseIntensity, FamilyLongevity, HealthProfile,
    HealthProfileInput, SmokingIntensity,
};
pub use health_score::{health_contributions, health_score, FactorContribution};
pub use medical_advances::{
    bonus_cap, medical_advances_bonus, AppliedMilestone, MedicalAdvances, Milestone, MILESTONES,
};
pub use outlook::HealthOutlook;
