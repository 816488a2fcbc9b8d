//! Typed result of one scheduled job run.

use tracing::{debug, info, warn};

use crate::error::{FetchError, PushError};

/// Why a tick ended without sending anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No push target configured or captured yet.
    NoRecipient,
    /// Today's daily push already went out.
    AlreadyNotified,
    /// Another run is delivering today's daily push right now.
    InFlight,
    /// Nothing to compare against yet.
    FirstSample,
    /// The swing stayed under the alert threshold.
    BelowThreshold,
}

/// Outcome of one scheduled job run.
///
/// Background jobs never propagate errors; each run reports what happened
/// so the scheduler can log it and move on.
#[derive(Debug)]
pub enum TickOutcome {
    Delivered,
    Skipped(SkipReason),
    FetchFailed(FetchError),
    PushFailed(PushError),
}

impl TickOutcome {
    /// True when a message was pushed.
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }

    /// The skip reason, when nothing was attempted or sent.
    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Self::Skipped(reason) => Some(*reason),
            _ => None,
        }
    }

    /// Log this outcome for the named job.
    pub fn log(&self, job: &'static str) {
        match self {
            Self::Delivered => info!(job, "Push delivered"),
            Self::Skipped(reason) => debug!(job, ?reason, "Tick skipped"),
            Self::FetchFailed(e) => warn!(job, error = %e, "Index fetch failed, skipping tick"),
            Self::PushFailed(e) => warn!(job, error = %e, "Push failed"),
        }
    }
}
