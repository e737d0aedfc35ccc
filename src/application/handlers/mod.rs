//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod estimation;

pub use estimation::{
    EstimateLifeExpectancyCommand, EstimateLifeExpectancyHandler, EstimateLifeExpectancyResult,
};
