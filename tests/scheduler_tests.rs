//! Scheduler loops driving the real services.

mod support;

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveTime, TimeZone};
use greedwatch::domain::time::taipei;
use greedwatch::infrastructure::scheduler::{ScheduleSpec, Scheduler, SchedulerHandle};
use greedwatch::testkit::index::ScriptedIndexSource;

use support::harness::Harness;

async fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    for _ in 0..500 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}

fn start(h: &Harness, daily_times: Vec<NaiveTime>, interval: Duration) -> SchedulerHandle {
    Scheduler::new(
        ScheduleSpec {
            daily_times,
            change_check_interval: interval,
        },
        Arc::clone(&h.services.daily),
        Arc::clone(&h.services.alerter),
        h.clock.clone(),
    )
    .start()
}

#[tokio::test]
async fn change_check_runs_at_startup() {
    let h = Harness::with_recipient(ScriptedIndexSource::steady(50.0));
    let far_away = NaiveTime::from_hms_opt(3, 0, 0).unwrap();

    let handle = start(&h, vec![far_away], Duration::from_secs(3600));
    let sampled = wait_until(|| h.services.alerter.state().last_value.is_some()).await;
    handle.shutdown();

    assert!(sampled, "alerter should take its first sample immediately");
    assert_eq!(h.messenger.push_count(), 0);
}

#[tokio::test]
async fn daily_job_fires_at_configured_time() {
    let h = Harness::with_recipient(ScriptedIndexSource::steady(50.0));
    // 200ms before the 09:00 trigger.
    h.clock.set(
        taipei().with_ymd_and_hms(2024, 3, 1, 8, 59, 59).unwrap()
            + chrono::Duration::milliseconds(800),
    );
    let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();

    let handle = start(&h, vec![nine], Duration::from_secs(3600));
    tokio::time::sleep(Duration::from_millis(200)).await;
    h.clock
        .set(taipei().with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap());
    let pushed = wait_until(|| h.messenger.push_count() >= 1).await;
    tokio::time::sleep(Duration::from_millis(100)).await;
    handle.shutdown();

    assert!(pushed, "daily push should go out at 09:00");
    let texts = h.pushed_texts();
    assert_eq!(texts.len(), 1);
    assert!(texts[0].starts_with("📊 每日恐懼貪婪指數報告"));
}

#[tokio::test]
async fn shutdown_stops_the_loops() {
    let h = Harness::with_recipient(ScriptedIndexSource::steady(50.0));
    let far_away = NaiveTime::from_hms_opt(3, 0, 0).unwrap();

    let handle = start(&h, vec![far_away], Duration::from_millis(20));
    wait_until(|| h.source.calls() >= 2).await;
    handle.shutdown();
    tokio::time::sleep(Duration::from_millis(50)).await;
    let calls = h.source.calls();
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(h.source.calls(), calls);
}

#[tokio::test]
async fn daily_job_waits_for_lagging_wall_clock() {
    let h = Harness::with_recipient(ScriptedIndexSource::steady(50.0));
    let before_nine = taipei().with_ymd_and_hms(2024, 3, 1, 8, 59, 59).unwrap()
        + chrono::Duration::milliseconds(900);
    h.clock.set(before_nine);
    let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();

    let handle = start(&h, vec![nine], Duration::from_secs(3600));
    // The timer elapses but the wall clock has not reached 09:00.
    tokio::time::sleep(Duration::from_millis(400)).await;
    let early = h.messenger.push_count();

    h.clock
        .set(taipei().with_ymd_and_hms(2024, 3, 1, 9, 0, 1).unwrap());
    let pushed = wait_until(|| h.messenger.push_count() >= 1).await;
    handle.shutdown();

    assert_eq!(early, 0);
    assert!(pushed, "daily push should go out once the wall clock catches up");
    assert_eq!(
        h.services.daily.state().last_notified,
        Some(chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
    );
}
