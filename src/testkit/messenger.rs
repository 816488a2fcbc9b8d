//! Recording messenger.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{OutboundMessage, RecipientId};
use crate::error::PushError;
use crate::port::Messenger;

/// Thread-safe collector of delivered messages.
///
/// Failed deliveries are not recorded.
#[derive(Debug, Default)]
pub struct RecordingMessenger {
    replies: Mutex<Vec<(String, OutboundMessage)>>,
    pushes: Mutex<Vec<(RecipientId, OutboundMessage)>>,
    failing_pushes: AtomicUsize,
    failing_replies: AtomicUsize,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `n` pushes fail.
    pub fn fail_next_pushes(&self, n: usize) {
        self.failing_pushes.store(n, Ordering::SeqCst);
    }

    /// Make the next `n` replies fail.
    pub fn fail_next_replies(&self, n: usize) {
        self.failing_replies.store(n, Ordering::SeqCst);
    }

    /// Delivered replies as `(reply_token, message)`.
    pub fn replies(&self) -> Vec<(String, OutboundMessage)> {
        self.replies.lock().clone()
    }

    /// Delivered pushes as `(recipient, message)`.
    pub fn pushes(&self) -> Vec<(RecipientId, OutboundMessage)> {
        self.pushes.lock().clone()
    }

    pub fn push_count(&self) -> usize {
        self.pushes.lock().len()
    }

    fn take_failure(counter: &AtomicUsize) -> bool {
        counter
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }

    fn rejected() -> PushError {
        PushError::Rejected {
            status: 500,
            body: "injected failure".into(),
        }
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn reply(&self, reply_token: &str, message: OutboundMessage) -> Result<(), PushError> {
        if Self::take_failure(&self.failing_replies) {
            return Err(Self::rejected());
        }
        self.replies.lock().push((reply_token.to_string(), message));
        Ok(())
    }

    async fn push(&self, to: &RecipientId, message: OutboundMessage) -> Result<(), PushError> {
        if Self::take_failure(&self.failing_pushes) {
            return Err(Self::rejected());
        }
        self.pushes.lock().push((to.clone(), message));
        Ok(())
    }
}
