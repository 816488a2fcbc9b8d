//! LINE channel configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::adapter::outbound::line::DEFAULT_API_BASE;
use crate::domain::RecipientId;
use crate::error::ConfigError;

/// Environment variable holding the channel access token.
pub const ACCESS_TOKEN_VAR: &str = "LINE_CHANNEL_ACCESS_TOKEN";
/// Environment variable holding the channel secret.
pub const CHANNEL_SECRET_VAR: &str = "LINE_CHANNEL_SECRET";
/// Environment variable holding an optional preset push recipient.
pub const USER_ID_VAR: &str = "LINE_USER_ID";

/// LINE Messaging API configuration.
///
/// Credentials and the recipient are loaded from the environment only,
/// never from the config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LineConfig {
    /// API host, overridable for testing.
    pub api_base: String,
    /// Request timeout in seconds (default: 10).
    pub timeout_secs: u64,
    #[serde(skip)]
    pub channel_access_token: Option<String>,
    #[serde(skip)]
    pub channel_secret: Option<String>,
    #[serde(skip)]
    pub user_id: Option<String>,
}

/// Credentials required to run the bot.
#[derive(Clone)]
pub struct LineCredentials {
    pub access_token: String,
    pub channel_secret: String,
}

impl std::fmt::Debug for LineCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineCredentials").finish_non_exhaustive()
    }
}

impl LineConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Required credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] naming the first absent variable.
    pub fn credentials(&self) -> Result<LineCredentials, ConfigError> {
        let access_token = self
            .channel_access_token
            .clone()
            .ok_or(ConfigError::MissingField {
                field: ACCESS_TOKEN_VAR,
            })?;
        let channel_secret = self
            .channel_secret
            .clone()
            .ok_or(ConfigError::MissingField {
                field: CHANNEL_SECRET_VAR,
            })?;
        Ok(LineCredentials {
            access_token,
            channel_secret,
        })
    }

    /// Preset push recipient, if configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a blank id.
    pub fn recipient(&self) -> Result<Option<RecipientId>, ConfigError> {
        self.user_id
            .as_deref()
            .map(RecipientId::try_new)
            .transpose()
            .map_err(|e| ConfigError::InvalidValue {
                field: USER_ID_VAR,
                reason: e.to_string(),
            })
    }
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            timeout_secs: 10,
            channel_access_token: None,
            channel_secret: None,
            user_id: None,
        }
    }
}
