//! HTTP client for the alternative.me index.

use std::time::Duration;

use async_trait::async_trait;
use chrono::FixedOffset;
use reqwest::Client;
use tracing::debug;

use crate::domain::IndexReading;
use crate::error::FetchError;
use crate::port::IndexSource;

use super::dto::parse_response;

/// Public Fear & Greed endpoint.
pub const DEFAULT_URL: &str = "https://api.alternative.me/fng/";

/// Fetches the crypto Fear & Greed index from alternative.me.
#[derive(Debug, Clone)]
pub struct AlternativeMeClient {
    client: Client,
    url: String,
    offset: FixedOffset,
}

impl AlternativeMeClient {
    /// Create a client for `url`; timestamps are converted into `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the HTTP client cannot be built.
    pub fn new(
        url: impl Into<String>,
        timeout: Duration,
        offset: FixedOffset,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Http)?;
        Ok(Self {
            client,
            url: url.into(),
            offset,
        })
    }
}

#[async_trait]
impl IndexSource for AlternativeMeClient {
    fn name(&self) -> &'static str {
        "alternative.me"
    }

    async fn fetch(&self) -> Result<IndexReading, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(FetchError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(FetchError::Http)?;
        let reading = parse_response(&body, self.offset)?;

        debug!(
            value = reading.value(),
            classification = reading.classification(),
            "Index fetched"
        );
        Ok(reading)
    }
}
