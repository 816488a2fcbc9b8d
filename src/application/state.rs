//! Shared push-target state.

use parking_lot::RwLock;

use crate::domain::RecipientId;

/// The single push target, shared by the webhook path and scheduler jobs.
///
/// Either preconfigured at startup or captured from the first inbound
/// message. Capture is first-writer-wins: once set, later senders never
/// replace it. Multiple distinct users talking to the bot before a
/// recipient is known is a known limitation; only the first is adopted.
#[derive(Debug, Default)]
pub struct RecipientSlot {
    recipient: RwLock<Option<RecipientId>>,
}

impl RecipientSlot {
    /// Create a slot, optionally preconfigured.
    #[must_use]
    pub fn new(initial: Option<RecipientId>) -> Self {
        Self {
            recipient: RwLock::new(initial),
        }
    }

    /// Current recipient, if any.
    pub fn get(&self) -> Option<RecipientId> {
        self.recipient.read().clone()
    }

    /// Check whether a recipient is known.
    pub fn is_set(&self) -> bool {
        self.recipient.read().is_some()
    }

    /// Adopt `candidate` if no recipient is set yet.
    ///
    /// Returns true when the candidate was adopted. The check and the write
    /// happen under one write lock.
    pub fn capture(&self, candidate: &RecipientId) -> bool {
        let mut slot = self.recipient.write();
        if slot.is_some() {
            return false;
        }
        *slot = Some(candidate.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> RecipientId {
        RecipientId::try_new(s).unwrap()
    }

    #[test]
    fn starts_empty_by_default() {
        let slot = RecipientSlot::default();
        assert!(!slot.is_set());
        assert!(slot.get().is_none());
    }

    #[test]
    fn first_writer_wins() {
        let slot = RecipientSlot::default();
        assert!(slot.capture(&id("U1")));
        assert!(!slot.capture(&id("U2")));
        assert_eq!(slot.get(), Some(id("U1")));
    }

    #[test]
    fn preconfigured_recipient_is_never_replaced() {
        let slot = RecipientSlot::new(Some(id("Uconfigured")));
        assert!(!slot.capture(&id("Usender")));
        assert_eq!(slot.get(), Some(id("Uconfigured")));
    }
}
