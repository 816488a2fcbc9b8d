//! Inbound message handling for the webhook path.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::InboundMessage;
use crate::error::PushError;
use crate::port::Messenger;

use super::responder::MessageResponder;
use super::state::RecipientSlot;

/// Answers inbound messages and captures the push target.
pub struct InboundDispatcher {
    responder: MessageResponder,
    messenger: Arc<dyn Messenger>,
    recipient: Arc<RecipientSlot>,
}

impl InboundDispatcher {
    pub fn new(
        responder: MessageResponder,
        messenger: Arc<dyn Messenger>,
        recipient: Arc<RecipientSlot>,
    ) -> Self {
        Self {
            responder,
            messenger,
            recipient,
        }
    }

    /// Handle one inbound text message.
    ///
    /// The sender becomes the push target if none is known yet. The reply is
    /// sent with the message's reply token.
    ///
    /// # Errors
    ///
    /// Returns [`PushError`] when the reply could not be delivered.
    pub async fn handle(&self, message: InboundMessage) -> Result<(), PushError> {
        if let Some(sender) = &message.sender {
            if self.recipient.capture(sender) {
                info!(recipient = %sender, "Push recipient captured from first message");
            }
        }

        let reply = self.responder.respond(&message.text).await;
        self.messenger
            .reply(&message.reply_token, reply)
            .await
            .inspect_err(|e| warn!(error = %e, "Failed to send reply"))
    }
}
