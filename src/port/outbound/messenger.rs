//! Chat delivery port.

use async_trait::async_trait;

use crate::domain::{OutboundMessage, RecipientId};
use crate::error::PushError;

/// Delivers messages through the chat platform.
///
/// # Thread Safety
///
/// Shared between the webhook handlers and the scheduler jobs, so
/// implementations must be `Send + Sync`.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Answer an inbound message using its one-shot reply token.
    async fn reply(&self, reply_token: &str, message: OutboundMessage) -> Result<(), PushError>;

    /// Send an unsolicited message to a recipient.
    async fn push(&self, to: &RecipientId, message: OutboundMessage) -> Result<(), PushError>;
}
