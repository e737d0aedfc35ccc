//! Baseline life expectancy by country and gender.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::EstimationError;

/// Country used when a selector does not match any table entry.
pub const FALLBACK_COUNTRY: &str = "World";

/// Gender category used to select the baseline column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

impl Gender {
    pub fn all() -> &'static [Gender] {
        &[Gender::Male, Gender::Female, Gender::Other]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = EstimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "other" | "o" => Ok(Gender::Other),
            other => Err(EstimationError::invalid_profile(format!(
                "unknown gender '{}'",
                other
            ))),
        }
    }
}

/// Baseline life expectancy at birth, in years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BaselineEntry {
    pub country: &'static str,
    pub male: f64,
    pub female: f64,
}

impl BaselineEntry {
    /// Returns the figure for a gender; `Other` averages both columns.
    pub fn for_gender(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
            Gender::Other => (self.male + self.female) / 2.0,
        }
    }
}

const fn row(country: &'static str, male: f64, female: f64) -> BaselineEntry {
    BaselineEntry {
        country,
        male,
        female,
    }
}

const TABLE: &[BaselineEntry] = &[
    row("World", 70.8, 76.0),
    row("United States", 74.8, 80.2),
    row("Canada", 79.8, 84.1),
    row("Mexico", 72.1, 77.9),
    row("Brazil", 73.1, 79.9),
    row("Argentina", 73.6, 79.9),
    row("United Kingdom", 79.0, 82.9),
    row("Germany", 78.5, 83.2),
    row("France", 79.3, 85.2),
    row("Spain", 80.3, 85.8),
    row("Italy", 80.5, 84.8),
    row("Portugal", 78.8, 84.5),
    row("Russia", 67.6, 78.0),
    row("China", 75.0, 80.9),
    row("Japan", 81.1, 87.1),
    row("India", 69.5, 72.2),
    row("Australia", 81.2, 85.3),
    row("South Africa", 59.6, 65.6),
    row("Nigeria", 52.7, 54.3),
];

const ALIASES: &[(&str, &str)] = &[
    ("usa", "United States"),
    ("us", "United States"),
    ("united states of america", "United States"),
    ("uk", "United Kingdom"),
    ("great britain", "United Kingdom"),
    ("brasil", "Brazil"),
    ("deutschland", "Germany"),
];

static INDEX: Lazy<HashMap<String, &'static BaselineEntry>> = Lazy::new(|| {
    let mut index: HashMap<String, &'static BaselineEntry> = TABLE
        .iter()
        .map(|entry| (entry.country.to_ascii_lowercase(), entry))
        .collect();
    for (alias, country) in ALIASES {
        if let Some(entry) = TABLE.iter().find(|e| e.country == *country) {
            index.insert((*alias).to_string(), entry);
        }
    }
    index
});

/// Resolves a country selector to its table entry, falling back to "World".
pub fn resolve_country(country: &str) -> &'static BaselineEntry {
    INDEX
        .get(&country.trim().to_ascii_lowercase())
        .copied()
        .unwrap_or(&TABLE[0])
}

/// Baseline life expectancy for a country and gender.
pub fn baseline_expectancy(country: &str, gender: Gender) -> f64 {
    resolve_country(country).for_gender(gender)
}

/// Countries present in the table, in table order.
pub fn supported_countries() -> Vec<&'static str> {
    TABLE.iter().map(|entry| entry.country).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brazil_female() {
        assert_eq!(baseline_expectancy("Brazil", Gender::Female), 79.9);
    }

    #[test]
    fn brazil_male() {
        assert_eq!(baseline_expectancy("Brazil", Gender::Male), 73.1);
    }

    #[test]
    fn other_gender_averages_columns() {
        let value = baseline_expectancy("Brazil", Gender::Other);
        assert!((value - 76.5).abs() < 1e-9);
    }

    #[test]
    fn unknown_country_falls_back_to_world() {
        assert_eq!(
            baseline_expectancy("Atlantis", Gender::Male),
            baseline_expectancy(FALLBACK_COUNTRY, Gender::Male)
        );
        assert_eq!(resolve_country("Atlantis").country, FALLBACK_COUNTRY);
    }

    #[test]
    fn empty_country_falls_back_to_world() {
        assert_eq!(resolve_country("").country, FALLBACK_COUNTRY);
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        assert_eq!(resolve_country("  bRaZiL ").country, "Brazil");
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(resolve_country("USA").country, "United States");
        assert_eq!(resolve_country("uk").country, "United Kingdom");
    }

    #[test]
    fn world_is_first_supported_country() {
        let countries = supported_countries();
        assert_eq!(countries[0], FALLBACK_COUNTRY);
        assert!(countries.contains(&"Japan"));
    }

    #[test]
    fn gender_parses_case_insensitively() {
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(" m ".parse::<Gender>().unwrap(), Gender::Male);
        assert!("unknown".parse::<Gender>().is_err());
    }
}
