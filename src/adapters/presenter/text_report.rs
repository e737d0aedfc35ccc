//! Plain-text report renderer.
//!
//! Turns an `EstimationResult` into the message shown by the console and
//! returned as `summary` by the HTTP API.

use crate::domain::longevity::{bonus_cap, EstimationResult, HealthOutlook};

const CAP_TOLERANCE: f64 = 1e-9;

/// Closing advisory printed under every estimate.
pub const DISCLAIMER: &str = "Remember, this is just an estimate. A healthy lifestyle can \
significantly improve your life expectancy. Consult a healthcare professional for a more \
accurate assessment.";

/// Renders the full report.
pub fn render_report(result: &EstimationResult) -> String {
    let mut report = String::new();

    report.push_str(&lived_line(result));
    report.push_str("\n\n");
    report.push_str(&render_breakdown(result));
    report.push('\n');
    report.push_str(&format!(
        "Based on your current age and the information provided, you might have approximately \
{:.1} years left (until around {}).\n\n",
        result.remaining_years, result.projected_death_year
    ));
    report.push_str(&render_banner(result.outlook));
    report.push('\n');
    report.push_str(DISCLAIMER);
    report.push('\n');

    report
}

/// "You have lived ..." sentence.
pub fn lived_line(result: &EstimationResult) -> String {
    format!(
        "You have lived {} {}, {} {} and {} {}.",
        result.elapsed.years,
        plural(result.elapsed.years, "year", "years"),
        result.elapsed.months,
        plural(result.elapsed.months, "month", "months"),
        result.elapsed.days,
        plural(result.elapsed.days, "day", "days"),
    )
}

/// Composition of the adjusted expectancy.
pub fn render_breakdown(result: &EstimationResult) -> String {
    let mut section = format!(
        "Baseline life expectancy ({}): {:.1} years\n",
        result.country, result.base_expectancy
    );

    if result.age_bonus > 0.0 {
        section.push_str(&format!(
            "Survivorship bonus (age over 65): {:+.1} years\n",
            result.age_bonus
        ));
    }

    section.push_str(&format!(
        "Lifestyle adjustment: {:+} years\n",
        result.health_score
    ));
    for contribution in &result.contributions {
        section.push_str(&format!(
            "  - {}: {:+}\n",
            contribution.factor.replace('_', " "),
            contribution.years
        ));
    }

    section.push_str(&format!(
        "Medical advances bonus: {:+.1} years\n",
        result.medical_bonus
    ));
    for milestone in &result.milestones {
        section.push_str(&format!(
            "  - {} ({}): {:+.2}\n",
            milestone.year, milestone.description, milestone.bonus
        ));
    }
    let uncapped: f64 = result.milestones.iter().map(|m| m.bonus).sum();
    if uncapped > result.medical_bonus + CAP_TOLERANCE {
        section.push_str(&format!(
            "  (milestones add up to {:+.2}; capped at {:.1} years, 0.3 per year of age)\n",
            uncapped,
            bonus_cap(result.elapsed.years)
        ));
    }

    section.push_str(&format!(
        "Adjusted life expectancy: {:.1} years\n",
        result.adjusted_expectancy
    ));

    section
}

/// Qualitative interpretation banner.
pub fn render_banner(outlook: HealthOutlook) -> String {
    format!("Health outlook: {} - {}\n", outlook.label(), outlook.message())
}

fn plural(count: u32, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 {
        one
    } else {
        many
    }
}
