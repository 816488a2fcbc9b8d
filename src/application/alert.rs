//! Sharp-swing detection.
//!
//! Each scheduled tick samples the index and compares it with the previous
//! sample. A swing of [`ALERT_THRESHOLD`] points or more triggers a push.
//! State lives for the process lifetime only, so the first tick after a
//! restart never alerts.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::domain::IndexReading;
use crate::port::{Clock, IndexSource, Messenger};

use super::format::alert_message;
use super::state::RecipientSlot;
use super::tick::{SkipReason, TickOutcome};

/// Minimum absolute change, in index points, that triggers an alert.
pub const ALERT_THRESHOLD: f64 = 20.0;

/// Last observed sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertState {
    pub last_value: Option<f64>,
    pub last_checked_at: Option<DateTime<FixedOffset>>,
}

/// A swing large enough to notify about.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeAlert {
    pub current: f64,
    pub previous: f64,
    pub delta: f64,
    pub classification: String,
    pub observed_at: DateTime<FixedOffset>,
}

impl ChangeAlert {
    /// Compare `current` with `previous`; `Some` when the swing reaches the threshold.
    pub fn detect(previous: f64, current: &IndexReading) -> Option<Self> {
        let delta = (current.value() - previous).abs();
        if delta < ALERT_THRESHOLD {
            return None;
        }
        Some(Self {
            current: current.value(),
            previous,
            delta,
            classification: current.classification().to_string(),
            observed_at: current.observed_at(),
        })
    }

    /// Delta rounded to one decimal place, e.g. "25.0".
    pub fn delta_display(&self) -> String {
        format!("{:.1}", self.delta)
    }
}

/// What one sample amounts to against the previous one.
#[derive(Debug, Clone, PartialEq)]
pub enum Observation {
    /// Nothing to compare against yet.
    FirstSample,
    /// The swing stayed under the threshold.
    BelowThreshold { previous: f64 },
    Alert(ChangeAlert),
}

/// Periodic change alerter.
pub struct ChangeAlerter {
    source: Arc<dyn IndexSource>,
    messenger: Arc<dyn Messenger>,
    recipient: Arc<RecipientSlot>,
    clock: Arc<dyn Clock>,
    state: Mutex<AlertState>,
}

impl ChangeAlerter {
    pub fn new(
        source: Arc<dyn IndexSource>,
        messenger: Arc<dyn Messenger>,
        recipient: Arc<RecipientSlot>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            source,
            messenger,
            recipient,
            clock,
            state: Mutex::new(AlertState::default()),
        }
    }

    /// Snapshot of the alert state.
    pub fn state(&self) -> AlertState {
        self.state.lock().clone()
    }

    /// Record `reading` as the latest sample and classify it against the
    /// previous one.
    ///
    /// The state is overwritten whether or not an alert fires.
    pub fn observe(&self, reading: &IndexReading) -> Observation {
        let Some(previous) = self.record(reading) else {
            return Observation::FirstSample;
        };
        match ChangeAlert::detect(previous, reading) {
            Some(alert) => Observation::Alert(alert),
            None => Observation::BelowThreshold { previous },
        }
    }

    /// Run one scheduled check.
    pub async fn tick(&self) -> TickOutcome {
        let Some(recipient) = self.recipient.get() else {
            return TickOutcome::Skipped(SkipReason::NoRecipient);
        };

        let reading = match self.source.fetch().await {
            Ok(reading) => reading,
            Err(e) => return TickOutcome::FetchFailed(e),
        };

        let alert = match self.observe(&reading) {
            Observation::FirstSample => {
                debug!(value = reading.value(), "First sample recorded");
                return TickOutcome::Skipped(SkipReason::FirstSample);
            }
            Observation::BelowThreshold { previous } => {
                debug!(
                    previous,
                    current = reading.value(),
                    "Index change below threshold"
                );
                return TickOutcome::Skipped(SkipReason::BelowThreshold);
            }
            Observation::Alert(alert) => alert,
        };

        info!(
            previous = alert.previous,
            current = alert.current,
            delta = %alert.delta_display(),
            "Index swing detected"
        );

        // A failed alert is dropped; the next tick compares against this sample.
        match self.messenger.push(&recipient, alert_message(&alert)).await {
            Ok(()) => TickOutcome::Delivered,
            Err(e) => TickOutcome::PushFailed(e),
        }
    }

    /// Swap in the new sample and return the previous value, atomically.
    fn record(&self, reading: &IndexReading) -> Option<f64> {
        let mut state = self.state.lock();
        let previous = state.last_value.replace(reading.value());
        state.last_checked_at = Some(self.clock.now());
        previous
    }
}
