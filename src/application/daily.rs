//! Once-a-day index push.
//!
//! The scheduler calls [`DailyNotifier::tick`] several times a day; only the
//! first successful push of a local calendar day goes out. A failed fetch
//! or push leaves the day unmarked so a later tick retries.

use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::Mutex;
use tracing::debug;

use crate::domain::time::local_date;
use crate::port::{Clock, IndexSource, Messenger};

use super::format::daily_message;
use super::state::RecipientSlot;
use super::tick::{SkipReason, TickOutcome};

/// Dedup state for the daily push.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationState {
    /// Local date of the last successful push.
    pub last_notified: Option<NaiveDate>,
    /// Local date a run is currently delivering for.
    pub in_flight: Option<NaiveDate>,
}

/// Scheduled daily notifier.
pub struct DailyNotifier {
    source: Arc<dyn IndexSource>,
    messenger: Arc<dyn Messenger>,
    recipient: Arc<RecipientSlot>,
    clock: Arc<dyn Clock>,
    state: Mutex<NotificationState>,
}

impl DailyNotifier {
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
            state: Mutex::new(NotificationState::default()),
        }
    }

    /// Snapshot of the dedup state.
    pub fn state(&self) -> NotificationState {
        self.state.lock().clone()
    }

    /// Run one scheduled push attempt.
    pub async fn tick(&self) -> TickOutcome {
        let Some(recipient) = self.recipient.get() else {
            return TickOutcome::Skipped(SkipReason::NoRecipient);
        };

        let today = local_date(self.clock.now());
        let claim = match self.claim(today) {
            Ok(claim) => claim,
            Err(reason) => return TickOutcome::Skipped(reason),
        };

        let reading = match self.source.fetch().await {
            Ok(reading) => reading,
            Err(e) => return TickOutcome::FetchFailed(e),
        };

        match self.messenger.push(&recipient, daily_message(&reading)).await {
            Ok(()) => {
                claim.commit();
                debug!(date = %today, "Daily notification recorded");
                TickOutcome::Delivered
            }
            Err(e) => TickOutcome::PushFailed(e),
        }
    }

    /// Check-and-reserve today's push under one lock.
    fn claim(&self, today: NaiveDate) -> Result<Claim<'_>, SkipReason> {
        let mut state = self.state.lock();
        if state.last_notified == Some(today) {
            return Err(SkipReason::AlreadyNotified);
        }
        if state.in_flight == Some(today) {
            return Err(SkipReason::InFlight);
        }
        state.in_flight = Some(today);
        Ok(Claim {
            state: &self.state,
            date: today,
            committed: false,
        })
    }
}

/// Reservation of one day's push. Released on drop unless committed.
struct Claim<'a> {
    state: &'a Mutex<NotificationState>,
    date: NaiveDate,
    committed: bool,
}

impl Claim<'_> {
    fn commit(mut self) {
        let mut state = self.state.lock();
        state.last_notified = Some(self.date);
        if state.in_flight == Some(self.date) {
            state.in_flight = None;
        }
        self.committed = true;
    }
}

impl Drop for Claim<'_> {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        let mut state = self.state.lock();
        if state.in_flight == Some(self.date) {
            state.in_flight = None;
        }
    }
}
