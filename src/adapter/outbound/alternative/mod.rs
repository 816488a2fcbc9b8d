//! alternative.me Fear & Greed index adapter.

mod client;
mod dto;

pub use client::{AlternativeMeClient, DEFAULT_URL};
pub use dto::parse_response;
