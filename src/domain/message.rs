//! Chat messages exchanged with the messaging platform.

use super::RecipientId;

/// A button that sends `text` back to the bot when tapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageAction {
    pub label: String,
    pub text: String,
}

/// Buttons template: a card with a title, body text and message actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonsTemplate {
    /// Shown by clients that cannot render templates.
    pub alt_text: String,
    pub title: String,
    pub text: String,
    pub actions: Vec<MessageAction>,
}

/// Payload sent to a user, either as a reply or a push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundMessage {
    Text(String),
    Buttons(ButtonsTemplate),
}

impl OutboundMessage {
    /// Create a plain text message.
    pub fn text(body: impl Into<String>) -> Self {
        Self::Text(body.into())
    }

    /// Text body, if this is a text message.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(body) => Some(body),
            Self::Buttons(_) => None,
        }
    }
}

/// A text message received through the webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// One-shot token for answering this message.
    pub reply_token: String,
    /// Sender, when the platform disclosed one.
    pub sender: Option<RecipientId>,
    pub text: String,
}
