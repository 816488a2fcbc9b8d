//! Webhook event envelope.

use serde::Deserialize;
use tracing::debug;

use crate::domain::{InboundMessage, RecipientId};

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Event {
    #[serde(rename = "type")]
    kind: String,
    reply_token: Option<String>,
    source: Option<Source>,
    message: Option<Message>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Source {
    user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Message {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}

/// Extract the text messages from a webhook body.
///
/// Non-message events, non-text messages and events without a reply token
/// are skipped.
///
/// # Errors
///
/// Returns the JSON error when the body is not a webhook envelope.
pub fn parse_events(body: &[u8]) -> Result<Vec<InboundMessage>, serde_json::Error> {
    let envelope: Envelope = serde_json::from_slice(body)?;

    let messages = envelope
        .events
        .into_iter()
        .filter_map(|event| {
            if event.kind != "message" {
                debug!(kind = %event.kind, "Ignoring webhook event");
                return None;
            }
            let message = event.message.filter(|m| m.kind == "text")?;
            Some(InboundMessage {
                reply_token: event.reply_token?,
                sender: event
                    .source
                    .and_then(|s| s.user_id)
                    .and_then(|id| RecipientId::try_new(id).ok()),
                text: message.text?,
            })
        })
        .collect();

    Ok(messages)
}
