//! Health Score - additive lifestyle adjustment in years.

use super::health_profile::{
    AlcoholLevel, BmiCategory, DietQuality, ExerciseIntensity, FamilyLongevity, HealthProfile,
    SmokingIntensity,
};

pub const DIABETES_PENALTY: i32 = -6;
pub const HYPERTENSION_PENALTY: i32 = -4;
pub const HEART_DISEASE_PENALTY: i32 = -10;
pub const GOOD_SLEEP_BONUS: i32 = 2;
pub const STRESS_MANAGEMENT_BONUS: i32 = 3;
pub const SOCIAL_CONNECTIONS_BONUS: i32 = 2;
pub const REGULAR_CHECKUPS_BONUS: i32 = 1;

impl SmokingIntensity {
    pub fn adjustment(&self) -> i32 {
        match self {
            SmokingIntensity::Light => -5,
            SmokingIntensity::Moderate => -8,
            SmokingIntensity::Heavy => -12,
        }
    }
}

impl AlcoholLevel {
    pub fn adjustment(&self) -> i32 {
        match self {
            AlcoholLevel::Heavy => -6,
            AlcoholLevel::Moderate => 1,
            AlcoholLevel::None | AlcoholLevel::Light => 0,
        }
    }
}

impl BmiCategory {
    pub fn adjustment(&self) -> i32 {
        match self {
            BmiCategory::Mild => -2,
            BmiCategory::Moderate => -5,
            BmiCategory::Severe => -8,
        }
    }
}

impl DietQuality {
    pub fn adjustment(&self) -> i32 {
        match self {
            DietQuality::Basic => 1,
            DietQuality::Good => 3,
            DietQuality::Excellent => 5,
        }
    }
}

impl ExerciseIntensity {
    pub fn adjustment(&self) -> i32 {
        match self {
            ExerciseIntensity::Light => 2,
            ExerciseIntensity::Moderate => 4,
            ExerciseIntensity::High => 6,
        }
    }
}

impl FamilyLongevity {
    pub fn adjustment(&self) -> i32 {
        match self {
            FamilyLongevity::High => 4,
            FamilyLongevity::Average => 0,
            FamilyLongevity::Low => -3,
        }
    }
}

/// One factor's contribution to the health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct FactorContribution {
    pub factor: &'static str,
    pub years: i32,
}

/// Lists every non-zero contribution, in a stable order.
pub fn health_contributions(profile: &HealthProfile) -> Vec<FactorContribution> {
    let flag = |on: bool, years: i32| if on { years } else { 0 };

    let all = [
        ("smoking", profile.smoking.map_or(0, |s| s.adjustment())),
        ("alcohol", profile.alcohol.adjustment()),
        ("obesity", profile.obesity.map_or(0, |b| b.adjustment())),
        ("diabetes", flag(profile.diabetes, DIABETES_PENALTY)),
        ("hypertension", flag(profile.hypertension, HYPERTENSION_PENALTY)),
        ("heart_disease", flag(profile.heart_disease, HEART_DISEASE_PENALTY)),
        ("healthy_diet", profile.healthy_diet.map_or(0, |d| d.adjustment())),
        ("regular_exercise", profile.regular_exercise.map_or(0, |e| e.adjustment())),
        ("good_sleep", flag(profile.good_sleep, GOOD_SLEEP_BONUS)),
        ("stress_management", flag(profile.stress_management, STRESS_MANAGEMENT_BONUS)),
        ("social_connections", flag(profile.social_connections, SOCIAL_CONNECTIONS_BONUS)),
        ("regular_checkups", flag(profile.regular_checkups, REGULAR_CHECKUPS_BONUS)),
        ("family_longevity", profile.family_longevity.adjustment()),
    ];

    all.into_iter()
        .filter(|(_, years)| *years != 0)
        .map(|(factor, years)| FactorContribution { factor, years })
        .collect()
}

/// Sum of all independent factor contributions.
pub fn health_score(profile: &HealthProfile) -> i32 {
    health_contributions(profile).iter().map(|c| c.years).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_scores_zero() {
        assert_eq!(health_score(&HealthProfile::default()), 0);
        assert!(health_contributions(&HealthProfile::default()).is_empty());
    }

    #[test]
    fn heavy_smoker_only_scores_minus_twelve() {
        let profile = HealthProfile {
            smoking: Some(SmokingIntensity::Heavy),
            ..Default::default()
        };
        assert_eq!(health_score(&profile), -12);
    }

    #[test]
    fn smoking_levels() {
        for (level, expected) in [
            (SmokingIntensity::Light, -5),
            (SmokingIntensity::Moderate, -8),
            (SmokingIntensity::Heavy, -12),
        ] {
            let profile = HealthProfile {
                smoking: Some(level),
                ..Default::default()
            };
            assert_eq!(health_score(&profile), expected, "{:?}", level);
        }
    }

    #[test]
    fn alcohol_levels() {
        assert_eq!(AlcoholLevel::None.adjustment(), 0);
        assert_eq!(AlcoholLevel::Light.adjustment(), 0);
        assert_eq!(AlcoholLevel::Moderate.adjustment(), 1);
        assert_eq!(AlcoholLevel::Heavy.adjustment(), -6);
    }

    #[test]
    fn medical_conditions_are_flat_penalties() {
        let profile = HealthProfile {
            diabetes: true,
            hypertension: true,
            heart_disease: true,
            ..Default::default()
        };
        assert_eq!(health_score(&profile), -20);
    }

    #[test]
    fn best_case_profile() {
        let profile = HealthProfile {
            alcohol: AlcoholLevel::Moderate,
            healthy_diet: Some(DietQuality::Excellent),
            regular_exercise: Some(ExerciseIntensity::High),
            good_sleep: true,
            stress_management: true,
            social_connections: true,
            regular_checkups: true,
            family_longevity: FamilyLongevity::High,
            ..Default::default()
        };
        // 1 + 5 + 6 + 2 + 3 + 2 + 1 + 4
        assert_eq!(health_score(&profile), 24);
    }

    #[test]
    fn worst_case_profile() {
        let profile = HealthProfile {
            smoking: Some(SmokingIntensity::Heavy),
            alcohol: AlcoholLevel::Heavy,
            obesity: Some(BmiCategory::Severe),
            diabetes: true,
            hypertension: true,
            heart_disease: true,
            family_longevity: FamilyLongevity::Low,
            ..Default::default()
        };
        // -12 - 6 - 8 - 6 - 4 - 10 - 3
        assert_eq!(health_score(&profile), -49);
    }

    #[test]
    fn contributions_name_each_factor() {
        let profile = HealthProfile {
            obesity: Some(BmiCategory::Mild),
            good_sleep: true,
            ..Default::default()
        };
        let contributions: Vec<(&str, i32)> = health_contributions(&profile)
            .iter()
            .map(|c| (c.factor, c.years))
            .collect();
        assert_eq!(contributions, vec![("obesity", -2), ("good_sleep", 2)]);
    }
}
