//! Domain types: index readings, recipients, chat messages.

pub mod error;
pub mod time;

mod message;
mod reading;
mod recipient;

pub use message::{ButtonsTemplate, InboundMessage, MessageAction, OutboundMessage};
pub use reading::IndexReading;
pub use recipient::RecipientId;
