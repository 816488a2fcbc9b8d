//! LINE Messaging API client.
//!
//! Implements [`Messenger`] with the reply and push endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::domain::{OutboundMessage, RecipientId};
use crate::error::PushError;
use crate::port::Messenger;

use super::dto::{PushRequest, ReplyRequest};

/// Production API host.
pub const DEFAULT_API_BASE: &str = "https://api.line.me";

const REPLY_PATH: &str = "/v2/bot/message/reply";
const PUSH_PATH: &str = "/v2/bot/message/push";

/// LINE Messaging API client.
#[derive(Debug, Clone)]
pub struct LineClient {
    client: Client,
    api_base: String,
    access_token: String,
}

impl LineClient {
    /// Create a client authenticated with a channel access token.
    ///
    /// # Errors
    ///
    /// Returns [`PushError::Http`] if the HTTP client cannot be built.
    pub fn new(
        api_base: impl Into<String>,
        access_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, PushError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(PushError::Http)?;
        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        })
    }

    async fn post<T: Serialize + Sync>(&self, path: &str, body: &T) -> Result<(), PushError> {
        let response = self
            .client
            .post(format!("{}{}", self.api_base, path))
            .bearer_auth(&self.access_token)
            .json(body)
            .send()
            .await
            .map_err(PushError::Http)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(PushError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl Messenger for LineClient {
    async fn reply(&self, reply_token: &str, message: OutboundMessage) -> Result<(), PushError> {
        let request = ReplyRequest {
            reply_token,
            messages: vec![message.into()],
        };
        self.post(REPLY_PATH, &request).await?;
        debug!("Reply sent");
        Ok(())
    }

    async fn push(&self, to: &RecipientId, message: OutboundMessage) -> Result<(), PushError> {
        let request = PushRequest {
            to: to.as_str(),
            messages: vec![message.into()],
        };
        self.post(PUSH_PATH, &request).await?;
        debug!(recipient = %to, "Push sent");
        Ok(())
    }
}
