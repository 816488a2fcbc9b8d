//! Request bodies for the reply and push endpoints.

use serde::Serialize;

use crate::domain::{MessageAction, OutboundMessage};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ReplyRequest<'a> {
    pub reply_token: &'a str,
    pub messages: Vec<WireMessage>,
}

#[derive(Debug, Serialize)]
pub(super) struct PushRequest<'a> {
    pub to: &'a str,
    pub messages: Vec<WireMessage>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(super) enum WireMessage {
    Text {
        text: String,
    },
    Template {
        #[serde(rename = "altText")]
        alt_text: String,
        template: WireTemplate,
    },
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(super) enum WireTemplate {
    Buttons {
        title: String,
        text: String,
        actions: Vec<WireAction>,
    },
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(super) enum WireAction {
    Message { label: String, text: String },
}

impl From<&MessageAction> for WireAction {
    fn from(action: &MessageAction) -> Self {
        Self::Message {
            label: action.label.clone(),
            text: action.text.clone(),
        }
    }
}

impl From<OutboundMessage> for WireMessage {
    fn from(message: OutboundMessage) -> Self {
        match message {
            OutboundMessage::Text(text) => Self::Text { text },
            OutboundMessage::Buttons(buttons) => Self::Template {
                alt_text: buttons.alt_text,
                template: WireTemplate::Buttons {
                    title: buttons.title,
                    text: buttons.text,
                    actions: buttons.actions.iter().map(WireAction::from).collect(),
                },
            },
        }
    }
}
