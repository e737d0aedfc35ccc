//! EstimateLifeExpectancyHandler - Command handler for one estimation.
//!
//! Reads the clock once, then runs the pure estimation pipeline.

use std::sync::Arc;

use crate::domain::longevity::{
    BirthMoment, EstimationError, EstimationResult, HealthProfile, LifeExpectancyEstimator,
};
use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Command to estimate remaining lifespan.
#[derive(Debug, Clone)]
pub struct EstimateLifeExpectancyCommand {
    pub birth: BirthMoment,
    pub profile: HealthProfile,
}

/// Result of a successful estimation.
pub type EstimateLifeExpectancyResult = EstimationResult;

/// Handler shared by every front end.
#[derive(Clone)]
pub struct EstimateLifeExpectancyHandler {
    clock: Arc<dyn Clock>,
}

impl EstimateLifeExpectancyHandler {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Current moment according to the handler's clock.
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    pub fn handle(
        &self,
        cmd: EstimateLifeExpectancyCommand,
    ) -> Result<EstimateLifeExpectancyResult, EstimationError> {
        let now = self.clock.now();

        match LifeExpectancyEstimator::estimate(&cmd.birth, &cmd.profile, &now) {
            Ok(result) => {
                tracing::info!(
                    birth = %cmd.birth,
                    country = result.country,
                    health_score = result.health_score,
                    remaining_years = result.remaining_years,
                    "Life expectancy estimated"
                );
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(birth = %cmd.birth, error = %e, "Estimation rejected");
                Err(e)
            }
        }
    }
}
