//! Clock frozen at a single moment, for tests and reproducible runs.

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: Timestamp,
}

impl FixedClock {
    pub fn new(at: Timestamp) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.at
    }
}
