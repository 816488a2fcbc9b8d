//! Webhook HTTP server.

mod routes;
mod server;

pub use server::{router, serve, WebhookState};
