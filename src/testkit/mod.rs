//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`index`] — [`ScriptedIndexSource`](index::ScriptedIndexSource), a queue
//!   of canned fetch results.
//! - [`messenger`] — [`RecordingMessenger`](messenger::RecordingMessenger),
//!   captures replies and pushes with failure injection.
//! - [`clock`] — [`ManualClock`](clock::ManualClock) for day-boundary tests.
//! - [`domain`] — Builders for readings and recipients.

pub mod clock;
pub mod domain;
pub mod index;
pub mod messenger;
