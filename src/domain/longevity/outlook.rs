//! HealthOutlook - qualitative banner derived from the health score.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthOutlook {
    Critical,
    Concerning,
    Moderate,
    Good,
    Excellent,
}

impl HealthOutlook {
    /// Buckets a health score: >=10, >=5, >=0, >=-5, below.
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 10 => HealthOutlook::Excellent,
            s if s >= 5 => HealthOutlook::Good,
            s if s >= 0 => HealthOutlook::Moderate,
            s if s >= -5 => HealthOutlook::Concerning,
            _ => HealthOutlook::Critical,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthOutlook::Excellent => "Excellent",
            HealthOutlook::Good => "Good",
            HealthOutlook::Moderate => "Moderate",
            HealthOutlook::Concerning => "Concerning",
            HealthOutlook::Critical => "Critical",
        }
    }

    /// One-line interpretation shown under the result.
    pub fn message(&self) -> &'static str {
        match self {
            HealthOutlook::Excellent => {
                "Your lifestyle choices are adding years to your life. Keep it up!"
            }
            HealthOutlook::Good => "Your habits are working in your favor.",
            HealthOutlook::Moderate => {
                "Your lifestyle is roughly neutral. Small changes could add years."
            }
            HealthOutlook::Concerning => {
                "Some of your habits are shortening your expected lifespan."
            }
            HealthOutlook::Critical => {
                "Your current risk factors weigh heavily on your life expectancy. \
                 Consider talking to a doctor."
            }
        }
    }
}

impl fmt::Display for HealthOutlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        assert_eq!(HealthOutlook::from_score(24), HealthOutlook::Excellent);
        assert_eq!(HealthOutlook::from_score(10), HealthOutlook::Excellent);
        assert_eq!(HealthOutlook::from_score(9), HealthOutlook::Good);
        assert_eq!(HealthOutlook::from_score(5), HealthOutlook::Good);
        assert_eq!(HealthOutlook::from_score(4), HealthOutlook::Moderate);
        assert_eq!(HealthOutlook::from_score(0), HealthOutlook::Moderate);
        assert_eq!(HealthOutlook::from_score(-1), HealthOutlook::Concerning);
        assert_eq!(HealthOutlook::from_score(-5), HealthOutlook::Concerning);
        assert_eq!(HealthOutlook::from_score(-6), HealthOutlook::Critical);
    }

    #[test]
    fn ordering_follows_severity() {
        assert!(HealthOutlook::Critical < HealthOutlook::Excellent);
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&HealthOutlook::Concerning).unwrap();
        assert_eq!(json, "\"concerning\"");
    }
}
