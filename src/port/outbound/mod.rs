//! Outbound ports (driven side).

pub mod clock;
pub mod index;
pub mod messenger;
