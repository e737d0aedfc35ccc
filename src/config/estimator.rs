//! Estimator configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::longevity::FALLBACK_COUNTRY;

/// Settings applied to every estimation
#[derive(Debug, Clone, Deserialize)]
pub struct EstimatorConfig {
    /// Country used when the user leaves the country blank
    #[serde(default = "default_country")]
    pub default_country: String,
}

impl EstimatorConfig {
    /// Validate estimator configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_country.trim().is_empty() {
            return Err(ValidationError::MissingRequired("estimator.default_country"));
        }
        Ok(())
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            default_country: default_country(),
        }
    }
}

fn default_country() -> String {
    FALLBACK_COUNTRY.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_world() {
        assert_eq!(EstimatorConfig::default().default_country, "World");
    }

    #[test]
    fn blank_default_country_is_rejected() {
        let config = EstimatorConfig {
            default_country: "  ".to_string(),
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("estimator.default_country"))
        );
    }
}
