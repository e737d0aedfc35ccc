//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every front end (console, HTTP) goes through the same handler.

pub mod handlers;

pub use handlers::{
    EstimateLifeExpectancyCommand, EstimateLifeExpectancyHandler, EstimateLifeExpectancyResult,
};
