//! Estimation command handlers.

mod estimate_life_expectancy;

pub use estimate_life_expectancy::{
    EstimateLifeExpectancyCommand, EstimateLifeExpectancyHandler, EstimateLifeExpectancyResult,
};
