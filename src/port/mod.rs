//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │       Application       │
//!                    │  responder / alerter /  │
//!                    │     daily notifier      │
//!                    └─────────────────────────┘
//!                      │          │          │
//!                      ▼          ▼          ▼
//!               ┌──────────┐ ┌──────────┐ ┌───────┐
//!               │  Index   │ │Messenger │ │ Clock │
//!               │  Source  │ │ (LINE)   │ │       │
//!               └──────────┘ └──────────┘ └───────┘
//! ```
//!
//! - [`IndexSource`] - sentiment index provider
//! - [`Messenger`] - reply and push delivery
//! - [`Clock`] - wall clock in the bot's fixed timezone

pub mod outbound;

pub use outbound::clock::Clock;
pub use outbound::index::IndexSource;
pub use outbound::messenger::Messenger;
