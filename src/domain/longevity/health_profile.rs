//! HealthProfile - lifestyle and medical inputs to the estimator.
//!
//! Flag-governed factors are `Option<Level>`: `None` means the flag is off,
//! `Some(level)` means it is on at that level. `HealthProfileInput` is the
//! loosely-typed boundary form (flag plus optional refinement label) that
//! front ends deserialize or collect, and converts into a `HealthProfile`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::baseline::{Gender, FALLBACK_COUNTRY};
use super::EstimationError;

crate::categorical_factor! {
    /// How heavily a smoker smokes.
    SmokingIntensity, "smoking intensity", default = Moderate,
    { Light => "light", Moderate => "moderate", Heavy => "heavy" }
}

crate::categorical_factor! {
    /// Typical alcohol consumption.
    AlcoholLevel, "alcohol level", default = None,
    { None => "none", Light => "light", Moderate => "moderate", Heavy => "heavy" }
}

crate::categorical_factor! {
    /// Severity of obesity by BMI band.
    BmiCategory, "BMI category", default = Moderate,
    { Mild => "mild", Moderate => "moderate", Severe => "severe" }
}

crate::categorical_factor! {
    /// Quality of a healthy diet.
    DietQuality, "diet quality", default = Good,
    { Basic => "basic", Good => "good", Excellent => "excellent" }
}

crate::categorical_factor! {
    /// Intensity of regular exercise.
    ExerciseIntensity, "exercise intensity", default = Moderate,
    { Light => "light", Moderate => "moderate", High => "high" }
}

crate::categorical_factor! {
    /// Longevity observed among close relatives.
    FamilyLongevity, "family longevity", default = Average,
    { Low => "low", Average => "average", High => "high" }
}

/// Validated lifestyle and medical profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthProfile {
    pub smoking: Option<SmokingIntensity>,
    pub alcohol: AlcoholLevel,
    pub obesity: Option<BmiCategory>,
    pub diabetes: bool,
    pub hypertension: bool,
    pub heart_disease: bool,
    pub healthy_diet: Option<DietQuality>,
    pub regular_exercise: Option<ExerciseIntensity>,
    pub good_sleep: bool,
    pub stress_management: bool,
    pub social_connections: bool,
    pub regular_checkups: bool,
    pub family_longevity: FamilyLongevity,
    pub gender: Gender,
    pub country: String,
}

impl Default for HealthProfile {
    fn default() -> Self {
        Self {
            smoking: None,
            alcohol: AlcoholLevel::default(),
            obesity: None,
            diabetes: false,
            hypertension: false,
            heart_disease: false,
            healthy_diet: None,
            regular_exercise: None,
            good_sleep: false,
            stress_management: false,
            social_connections: false,
            regular_checkups: false,
            family_longevity: FamilyLongevity::default(),
            gender: Gender::default(),
            country: FALLBACK_COUNTRY.to_string(),
        }
    }
}

/// Unvalidated profile as supplied by a front end.
///
/// Every field is optional on the wire; missing flags are `false` and
/// missing labels take their neutral default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthProfileInput {
    pub smoking: bool,
    pub smoking_intensity: Option<String>,
    pub alcohol: Option<String>,
    pub obesity: bool,
    pub bmi_category: Option<String>,
    pub diabetes: bool,
    pub hypertension: bool,
    pub heart_disease: bool,
    pub healthy_diet: bool,
    pub diet_quality: Option<String>,
    pub regular_exercise: bool,
    pub exercise_intensity: Option<String>,
    pub good_sleep: bool,
    pub stress_management: bool,
    pub social_connections: bool,
    pub regular_checkups: bool,
    pub family_longevity: Option<String>,
    pub gender: Option<String>,
    pub country: Option<String>,
}

impl HealthProfileInput {
    /// Validates the input and builds a `HealthProfile`.
    ///
    /// A blank or missing country resolves to `default_country`.
    ///
    /// # Errors
    ///
    /// Returns `EstimationError::InvalidProfile` when a label is not one of
    /// the enumerated levels, or when a refinement is supplied while its
    /// governing flag is off.
    pub fn into_profile(self, default_country: &str) -> Result<HealthProfile, EstimationError> {
        let country = present(self.country).unwrap_or_else(|| default_country.to_string());

        Ok(HealthProfile {
            smoking: refine(self.smoking, "smoking", self.smoking_intensity)?,
            alcohol: parse_or_default(self.alcohol)?,
            obesity: refine(self.obesity, "obesity", self.bmi_category)?,
            diabetes: self.diabetes,
            hypertension: self.hypertension,
            heart_disease: self.heart_disease,
            healthy_diet: refine(self.healthy_diet, "healthy_diet", self.diet_quality)?,
            regular_exercise: refine(
                self.regular_exercise,
                "regular_exercise",
                self.exercise_intensity,
            )?,
            good_sleep: self.good_sleep,
            stress_management: self.stress_management,
            social_connections: self.social_connections,
            regular_checkups: self.regular_checkups,
            family_longevity: parse_or_default(self.family_longevity)?,
            gender: parse_or_default(self.gender)?,
            country,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_or_default<T>(label: Option<String>) -> Result<T, EstimationError>
where
    T: FromStr<Err = EstimationError> + Default,
{
    match present(label) {
        Some(label) => label.parse(),
        None => Ok(T::default()),
    }
}

fn refine<T>(
    flag: bool,
    flag_name: &str,
    label: Option<String>,
) -> Result<Option<T>, EstimationError>
where
    T: FromStr<Err = EstimationError> + Default,
{
    let label = present(label);
    if !flag {
        return match label {
            Some(label) => Err(EstimationError::invalid_profile(format!(
                "'{}' was given but {} is not set",
                label, flag_name
            ))),
            None => Ok(None),
        };
    }
    parse_or_default(label).map(Some)
}
