//! LINE webhook decoding and verification.

mod event;
mod signature;

pub use event::parse_events;
pub use signature::{SignatureVerifier, SIGNATURE_HEADER};
