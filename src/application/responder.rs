//! Command replies for inbound chat messages.

use std::sync::Arc;

use tracing::warn;

use crate::domain::OutboundMessage;
use crate::port::IndexSource;

use super::format::{help_message, reading_message, APOLOGY, GREETING};

const INDEX_COMMANDS: [&str; 3] = ["指數", "現在指數", "index"];
const HELP_COMMANDS: [&str; 3] = ["說明", "help", "幫助"];

/// Recognized chat commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the current index.
    Index,
    /// Show the help card.
    Help,
    /// Anything else; answered with the greeting.
    Unknown,
}

impl Command {
    /// Case-insensitive exact match. Whitespace is significant.
    pub fn parse(text: &str) -> Self {
        let normalized = text.to_lowercase();
        if INDEX_COMMANDS.contains(&normalized.as_str()) {
            Self::Index
        } else if HELP_COMMANDS.contains(&normalized.as_str()) {
            Self::Help
        } else {
            Self::Unknown
        }
    }
}

/// Maps inbound text to a reply.
pub struct MessageResponder {
    source: Arc<dyn IndexSource>,
}

impl MessageResponder {
    pub fn new(source: Arc<dyn IndexSource>) -> Self {
        Self { source }
    }

    /// Build the reply for `text`. Never fails: fetch errors become an apology.
    pub async fn respond(&self, text: &str) -> OutboundMessage {
        match Command::parse(text) {
            Command::Index => match self.source.fetch().await {
                Ok(reading) => reading_message(&reading),
                Err(e) => {
                    warn!(source = self.source.name(), error = %e, "Index fetch failed for reply");
                    OutboundMessage::text(APOLOGY)
                }
            },
            Command::Help => help_message(),
            Command::Unknown => OutboundMessage::text(GREETING),
        }
    }
}
