//! Index provider configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::adapter::outbound::alternative::DEFAULT_URL;

/// Where and how to fetch the Fear & Greed index.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub url: String,
    /// Request timeout in seconds (default: 10).
    pub timeout_secs: u64,
}

impl IndexConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.into(),
            timeout_secs: 10,
        }
    }
}
