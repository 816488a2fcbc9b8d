//! Outbound adapters (driven side).

pub mod alternative;
pub mod clock;
pub mod line;
