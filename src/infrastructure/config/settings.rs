//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings.
//! Non-secret settings come from an optional TOML file; the LINE
//! credentials, the preset recipient and `PORT` come from the environment.
//!
//! # Example
//!
//! ```no_run
//! use greedwatch::infrastructure::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use url::Url;

use super::index::IndexConfig;
use super::line::{LineConfig, ACCESS_TOKEN_VAR, CHANNEL_SECRET_VAR, USER_ID_VAR};
use super::logging::LoggingConfig;
use super::schedule::ScheduleConfig;
use super::server::ServerConfig;
use crate::domain::time::offset_from_hours;
use crate::error::{ConfigError, Result};

/// Environment variable overriding the HTTP port.
pub const PORT_VAR: &str = "PORT";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Webhook listener.
    #[serde(default)]
    pub server: ServerConfig,

    /// Fear & Greed index provider.
    #[serde(default)]
    pub index: IndexConfig,

    /// LINE Messaging API.
    #[serde(default)]
    pub line: LineConfig,

    /// Daily push times and change-check cadence.
    #[serde(default)]
    pub schedule: ScheduleConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content, reading secrets from the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed, an environment override is
    /// invalid, or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_env(content, |key| std::env::var(key).ok())
    }

    /// Parse configuration from TOML content with an explicit environment lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Config::parse_toml`].
    pub fn parse_toml_with_env<F>(content: &str, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or if parsing or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_env(path, |key| std::env::var(key).ok())
    }

    /// [`Config::load`] with an explicit environment lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_with_env<P, F>(path: P, env: F) -> Result<Self>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(ConfigError::ReadFile(e).into()),
        };
        Self::parse_toml_with_env(&content, env)
    }

    /// Overlay environment values. Blank values count as unset.
    fn apply_env<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        self.line.channel_access_token = read(ACCESS_TOKEN_VAR);
        self.line.channel_secret = read(CHANNEL_SECRET_VAR);
        self.line.user_id = read(USER_ID_VAR);

        if let Some(port) = read(PORT_VAR) {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: PORT_VAR,
                reason: format!("'{port}' is not a valid port"),
            })?;
        }
        Ok(())
    }

    /// Validate configuration values.
    ///
    /// Credentials are checked separately by [`LineConfig::credentials`] so
    /// commands that never talk to LINE can run without them.
    fn validate(&self) -> Result<()> {
        validate_http_url("index.url", &self.index.url)?;
        validate_http_url("line.api_base", &self.line.api_base)?;

        if self.index.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "index.timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.line.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "line.timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.schedule.change_check_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "schedule.change_check_interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if offset_from_hours(self.schedule.utc_offset_hours).is_none() {
            return Err(ConfigError::InvalidValue {
                field: "schedule.utc_offset_hours",
                reason: "must be between -23 and 23".to_string(),
            }
            .into());
        }
        self.schedule.parsed_daily_times()?;
        self.line.recipient()?;

        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

fn validate_http_url(field: &'static str, raw: &str) -> Result<()> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }
        .into());
    }
    Ok(())
}
