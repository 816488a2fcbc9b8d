//! Job timers.
//!
//! Two independent loops, each on its own tokio task:
//!
//! ```text
//! daily loop:    sleep until next HH:MM ──► DailyNotifier::tick ──┐
//!                      ▲                                          │
//!                      └──────────────────────────────────────────┘
//! interval loop: every N seconds ──► ChangeAlerter::tick
//! ```
//!
//! Triggers that pass while the process is down or busy are not replayed.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Days, FixedOffset, NaiveTime, TimeZone};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::application::{ChangeAlerter, DailyNotifier};
use crate::port::Clock;

const MIN_WALL_WAIT: Duration = Duration::from_millis(10);

/// First daily trigger strictly after `after`, in `after`'s offset.
pub fn next_daily_fire(
    after: DateTime<FixedOffset>,
    times: &[NaiveTime],
) -> Option<DateTime<FixedOffset>> {
    let offset = *after.offset();
    let today = after.date_naive();
    let tomorrow = today.checked_add_days(Days::new(1))?;

    [today, tomorrow]
        .into_iter()
        .flat_map(|date| times.iter().map(move |time| date.and_time(*time)))
        .filter_map(|local| offset.from_local_datetime(&local).single())
        .filter(|candidate| *candidate > after)
        .min()
}

/// Schedule settings for [`Scheduler`].
#[derive(Debug, Clone)]
pub struct ScheduleSpec {
    pub daily_times: Vec<NaiveTime>,
    pub change_check_interval: Duration,
}

/// Drives the daily notifier and the change alerter.
pub struct Scheduler {
    spec: ScheduleSpec,
    daily: Arc<DailyNotifier>,
    alerter: Arc<ChangeAlerter>,
    clock: Arc<dyn Clock>,
}

/// Handle to the running job loops.
pub struct SchedulerHandle {
    tasks: Vec<JoinHandle<()>>,
}

impl SchedulerHandle {
    /// Stop both loops. An in-flight tick is abandoned.
    pub fn shutdown(self) {
        for task in self.tasks {
            task.abort();
        }
    }
}

impl Scheduler {
    pub fn new(
        spec: ScheduleSpec,
        daily: Arc<DailyNotifier>,
        alerter: Arc<ChangeAlerter>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            spec,
            daily,
            alerter,
            clock,
        }
    }

    /// Spawn the job loops.
    pub fn start(self) -> SchedulerHandle {
        info!(
            daily_times = ?self.spec.daily_times,
            interval_secs = self.spec.change_check_interval.as_secs(),
            "Scheduler started"
        );

        let daily = tokio::spawn(run_daily(
            self.daily,
            Arc::clone(&self.clock),
            self.spec.daily_times,
        ));
        let interval = tokio::spawn(run_interval(self.alerter, self.spec.change_check_interval));

        SchedulerHandle {
            tasks: vec![daily, interval],
        }
    }
}

async fn run_daily(daily: Arc<DailyNotifier>, clock: Arc<dyn Clock>, times: Vec<NaiveTime>) {
    let mut last_fire: Option<DateTime<FixedOffset>> = None;

    loop {
        let now = clock.now();
        // Never fire the same trigger twice if the timer wakes a hair early.
        let after = last_fire.map_or(now, |fired| fired.max(now));
        let Some(next) = next_daily_fire(after, &times) else {
            warn!("No daily trigger could be computed, daily job stopped");
            return;
        };

        sleep_until_wall(clock.as_ref(), next).await;

        last_fire = Some(next);
        daily.tick().await.log("daily_notifier");
    }
}

/// Sleep until `clock` reads at least `target`.
///
/// Timers run on the monotonic clock; if the wall clock lags behind it the
/// wait is repeated so the tick sees the trigger's local date.
async fn sleep_until_wall(clock: &dyn Clock, target: DateTime<FixedOffset>) {
    loop {
        let now = clock.now();
        if now >= target {
            return;
        }
        let wait = (target - now).to_std().unwrap_or_default();
        tokio::time::sleep(wait.max(MIN_WALL_WAIT)).await;
    }
}

async fn run_interval(alerter: Arc<ChangeAlerter>, period: Duration) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        alerter.tick().await.log("change_alerter");
    }
}
