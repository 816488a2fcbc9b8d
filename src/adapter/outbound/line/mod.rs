//! LINE Messaging API adapter.

mod client;
mod dto;

pub use client::{LineClient, DEFAULT_API_BASE};
