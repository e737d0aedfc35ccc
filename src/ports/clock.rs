//! Clock port - Source of the current moment.
//!
//! The estimator never reads the wall clock itself; application handlers
//! ask a `Clock` once per request and pass the result down explicitly.

use crate::domain::foundation::Timestamp;

/// Port for obtaining "now".
pub trait Clock: Send + Sync {
    /// Returns the current moment.
    fn now(&self) -> Timestamp;
}
