//! Application services (use cases).
//!
//! These services combine the domain types with the outbound ports to
//! answer chat messages and run the scheduled push jobs.

pub mod alert;
pub mod daily;
pub mod dispatch;
pub mod format;
pub mod responder;
pub mod state;
pub mod tick;

pub use alert::{AlertState, ChangeAlert, ChangeAlerter, Observation, ALERT_THRESHOLD};
pub use daily::{DailyNotifier, NotificationState};
pub use dispatch::InboundDispatcher;
pub use responder::{Command, MessageResponder};
pub use state::RecipientSlot;
pub use tick::{SkipReason, TickOutcome};
