//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! shared by the estimator and its front ends.

mod errors;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use timestamp::Timestamp;
