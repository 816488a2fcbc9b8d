use std::sync::Arc;

use greedwatch::application::RecipientSlot;
use greedwatch::domain::RecipientId;
use greedwatch::infrastructure::bootstrap::Services;
use greedwatch::testkit::clock::ManualClock;
use greedwatch::testkit::domain::recipient;
use greedwatch::testkit::index::ScriptedIndexSource;
use greedwatch::testkit::messenger::RecordingMessenger;

/// Fully wired services over test doubles.
pub struct Harness {
    pub source: Arc<ScriptedIndexSource>,
    pub messenger: Arc<RecordingMessenger>,
    pub clock: Arc<ManualClock>,
    pub services: Services,
}

impl Harness {
    /// Services with no push recipient.
    pub fn new(source: ScriptedIndexSource) -> Self {
        Self::build(source, None)
    }

    /// Services with recipient `U1` preset.
    pub fn with_recipient(source: ScriptedIndexSource) -> Self {
        Self::build(source, Some(recipient("U1")))
    }

    fn build(source: ScriptedIndexSource, preset: Option<RecipientId>) -> Self {
        let source = Arc::new(source);
        let messenger = Arc::new(RecordingMessenger::new());
        let clock = Arc::new(ManualClock::default());
        let services = Services::new(
            source.clone(),
            messenger.clone(),
            clock.clone(),
            Arc::new(RecipientSlot::new(preset)),
        );
        Self {
            source,
            messenger,
            clock,
            services,
        }
    }

    /// Text bodies of every push, in order.
    pub fn pushed_texts(&self) -> Vec<String> {
        self.messenger
            .pushes()
            .into_iter()
            .filter_map(|(_, message)| message.as_text().map(str::to_string))
            .collect()
    }
}
