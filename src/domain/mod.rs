//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (timestamps, errors)
//! - `longevity` - Pure life expectancy estimation pipeline

pub mod foundation;
pub mod longevity;
