//! System wall clock.

use chrono::{DateTime, FixedOffset};

use crate::domain::time::now_in;
use crate::port::Clock;

/// Reads the system clock and shifts it into a fixed offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    #[must_use]
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        now_in(self.offset)
    }
}
