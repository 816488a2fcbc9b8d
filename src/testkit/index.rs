//! Scripted index source.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::IndexReading;
use crate::error::FetchError;
use crate::port::IndexSource;

use super::domain::reading;

/// Returns queued results in order, then a fallback value (if any).
#[derive(Debug, Default)]
pub struct ScriptedIndexSource {
    script: Mutex<VecDeque<Result<IndexReading, FetchError>>>,
    fallback: Option<f64>,
    calls: AtomicUsize,
}

impl ScriptedIndexSource {
    /// Source with an empty script; fetches fail once it runs dry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Source that always returns `value` once the script runs dry.
    pub fn steady(value: f64) -> Self {
        Self {
            fallback: Some(value),
            ..Self::default()
        }
    }

    /// Queue a successful reading of `value`.
    pub fn push_value(&self, value: f64) -> &Self {
        self.script.lock().push_back(Ok(reading(value)));
        self
    }

    /// Queue a failure.
    pub fn push_error(&self, error: FetchError) -> &Self {
        self.script.lock().push_back(Err(error));
        self
    }

    /// Number of fetches performed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IndexSource for ScriptedIndexSource {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn fetch(&self) -> Result<IndexReading, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().pop_front();
        match (next, self.fallback) {
            (Some(result), _) => result,
            (None, Some(value)) => Ok(reading(value)),
            (None, None) => Err(FetchError::Malformed("script exhausted".into())),
        }
    }
}
