//! Inbound adapters (driving side).

pub mod http;
pub mod line;
