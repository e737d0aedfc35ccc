//! Adapters - Implementations of port interfaces and front ends.
//!
//! - `clock` - System and fixed clocks
//! - `presenter` - Plain-text report rendering
//! - `console` - Interactive command-line questionnaire
//! - `http` - Axum web API

pub mod clock;
pub mod console;
pub mod http;
pub mod presenter;

pub use clock::{FixedClock, SystemClock};
