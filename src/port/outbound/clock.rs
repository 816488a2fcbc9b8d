//! Wall clock port.

use chrono::{DateTime, FixedOffset};

/// Current time in the bot's fixed timezone.
///
/// Abstracted so day-boundary logic can be driven deterministically.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}
