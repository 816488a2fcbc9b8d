//! Sentiment index port.

use async_trait::async_trait;

use crate::domain::IndexReading;
use crate::error::FetchError;

/// Source of the current Fear & Greed reading.
///
/// Each call performs one fresh lookup. Implementations do not retry and
/// do not cache; callers decide what to do with a failure.
#[async_trait]
pub trait IndexSource: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &'static str;

    /// Fetch the most recent reading.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on transport failure, a non-2xx status, or a
    /// response that does not contain a complete reading.
    async fn fetch(&self) -> Result<IndexReading, FetchError>;
}
