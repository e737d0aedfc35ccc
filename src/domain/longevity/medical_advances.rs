//! Medical-Advances Bonus - speculative gain from future medical progress.
//!
//! A milestone counts only if the person is projected to still be alive in
//! its year. Younger people and nearer milestones weigh more, and the total
//! is capped by age.

use serde::Serialize;

/// A projected medical breakthrough.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Milestone {
    pub year: i32,
    pub base_gain: f64,
    pub description: &'static str,
}

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        year: 2030,
        base_gain: 3.0,
        description: "Personalized medicine and advanced gene therapies",
    },
    Milestone {
        year: 2040,
        base_gain: 5.0,
        description: "AI-driven diagnostics and early disease detection",
    },
    Milestone {
        year: 2050,
        base_gain: 8.0,
        description: "Cellular rejuvenation and senolytic therapies",
    },
    Milestone {
        year: 2060,
        base_gain: 10.0,
        description: "Regenerative medicine and organ replacement",
    },
];

pub const MAX_TOTAL_BONUS: f64 = 20.0;
pub const MAX_BONUS_PER_YEAR_OF_AGE: f64 = 0.3;
const MIN_AGE_FACTOR: f64 = 0.3;
const MIN_PROXIMITY_FACTOR: f64 = 0.5;
const PROXIMITY_HORIZON_YEARS: f64 = 50.0;

/// A milestone that contributed to the bonus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppliedMilestone {
    pub year: i32,
    pub bonus: f64,
    pub description: &'static str,
}

/// Total bonus and the milestones behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedicalAdvances {
    pub total: f64,
    pub applied: Vec<AppliedMilestone>,
}

/// Cap on the total bonus for a given age: min(20, 0.3 × age).
pub fn bonus_cap(age_years: u32) -> f64 {
    MAX_TOTAL_BONUS.min(MAX_BONUS_PER_YEAR_OF_AGE * f64::from(age_years))
}

/// Computes the medical-advances bonus.
///
/// `preliminary_remaining` is the remaining-years estimate before this
/// bonus; `current_year` comes from the caller's "now".
pub fn medical_advances_bonus(
    age_years: u32,
    preliminary_remaining: f64,
    current_year: i32,
) -> MedicalAdvances {
    let projected_death_year = f64::from(current_year) + preliminary_remaining.max(0.0);
    let age_factor = (1.0 - f64::from(age_years) / 100.0).max(MIN_AGE_FACTOR);

    let applied: Vec<AppliedMilestone> = MILESTONES
        .iter()
        .filter(|m| projected_death_year >= f64::from(m.year))
        .map(|m| {
            let years_to = f64::from((m.year - current_year).max(0));
            let proximity = (1.0 - years_to / PROXIMITY_HORIZON_YEARS).max(MIN_PROXIMITY_FACTOR);
            AppliedMilestone {
                year: m.year,
                bonus: m.base_gain * age_factor * proximity,
                description: m.description,
            }
        })
        .collect();

    let uncapped: f64 = applied.iter().map(|m| m.bonus).sum();

    MedicalAdvances {
        total: uncapped.min(bonus_cap(age_years)),
        applied,
    }
}
