use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors fetching or decoding the sentiment index.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("index request failed: {0}")]
    Http(#[source] reqwest::Error),

    #[error("index provider returned status {status}")]
    Status { status: u16 },

    #[error("malformed index response: {0}")]
    Malformed(String),

    #[error("index response contained no data")]
    Empty,
}

/// Errors delivering a message through the chat platform.
#[derive(Error, Debug)]
pub enum PushError {
    #[error("message request failed: {0}")]
    Http(#[source] reqwest::Error),

    #[error("message rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Inbound webhook signature failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("signature header missing")]
    Missing,

    #[error("signature does not match request body")]
    Mismatch,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Push(#[from] PushError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
