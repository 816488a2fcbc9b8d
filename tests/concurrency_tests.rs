//! Webhook and scheduled jobs sharing state across threads.

mod support;

use std::sync::Arc;

use greedwatch::application::{SkipReason, TickOutcome};
use greedwatch::domain::InboundMessage;
use greedwatch::testkit::domain::recipient;
use greedwatch::testkit::index::ScriptedIndexSource;

use support::harness::Harness;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_daily_ticks_push_once() {
    let h = Arc::new(Harness::with_recipient(ScriptedIndexSource::steady(50.0)));

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let h = Arc::clone(&h);
            tokio::spawn(async move { h.services.daily.tick().await })
        })
        .collect();

    let mut delivered = 0;
    for task in tasks {
        match task.await.unwrap() {
            TickOutcome::Delivered => delivered += 1,
            TickOutcome::Skipped(SkipReason::AlreadyNotified | SkipReason::InFlight) => {}
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    assert_eq!(delivered, 1);
    assert_eq!(h.messenger.push_count(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_change_checks_record_one_first_sample() {
    let h = Arc::new(Harness::with_recipient(ScriptedIndexSource::steady(50.0)));

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let h = Arc::clone(&h);
            tokio::spawn(async move { h.services.alerter.tick().await })
        })
        .collect();

    let mut first_samples = 0;
    for task in tasks {
        match task.await.unwrap().skip_reason() {
            Some(SkipReason::FirstSample) => first_samples += 1,
            Some(SkipReason::BelowThreshold) => {}
            other => panic!("unexpected skip reason: {other:?}"),
        }
    }

    assert_eq!(first_samples, 1);
    assert_eq!(h.messenger.push_count(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_senders_capture_exactly_one_recipient() {
    let h = Arc::new(Harness::new(ScriptedIndexSource::steady(50.0)));

    let senders: Vec<String> = (0..32).map(|i| format!("U{i}")).collect();
    let tasks: Vec<_> = senders
        .iter()
        .map(|sender| {
            let h = Arc::clone(&h);
            let message = InboundMessage {
                reply_token: format!("r-{sender}"),
                sender: Some(recipient(sender)),
                text: "hi".to_string(),
            };
            tokio::spawn(async move { h.services.dispatcher.handle(message).await })
        })
        .collect();
    let daily = {
        let h = Arc::clone(&h);
        tokio::spawn(async move { h.services.daily.tick().await })
    };

    for task in tasks {
        task.await.unwrap().unwrap();
    }
    daily.await.unwrap();

    let captured = h.services.recipient.get().expect("a recipient is captured");
    assert!(senders.contains(&captured.to_string()));
    assert_eq!(h.messenger.replies().len(), 32);

    // Whatever ran before capture skipped; anything pushed went to the winner.
    for (to, _) in h.messenger.pushes() {
        assert_eq!(to, captured);
    }
    h.services.daily.tick().await;
    assert_eq!(h.messenger.push_count(), 1);
}
