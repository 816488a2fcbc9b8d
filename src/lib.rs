//! greedwatch - a LINE bot for the crypto Fear & Greed index.
//!
//! Replies to chat commands with the current index and pushes it to a
//! single recipient on a schedule or when it swings sharply.
//!
//! # Architecture
//!
//! ```text
//! POST /callback ──► InboundDispatcher ──► MessageResponder ──► IndexSource
//!                          │                                        ▲
//!                          └──► Messenger::reply                    │
//!
//! Scheduler ──► DailyNotifier / ChangeAlerter ──► IndexSource ──────┘
//!                          └──► Messenger::push
//! ```
//!
//! # Modules
//!
//! - [`domain`] - Readings, recipients, chat messages, timezone helpers
//! - [`port`] - Traits for the index source, messenger and clock
//! - [`application`] - Responder, change alerter, daily notifier
//! - [`adapter`] - alternative.me client, LINE client, webhook server
//! - [`infrastructure`] - Configuration, scheduler, composition root
//! - [`cli`] - Command-line entry points
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `testkit` - Scripted ports for integration tests

pub mod adapter;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
