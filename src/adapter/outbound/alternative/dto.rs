//! Wire format of the alternative.me `/fng/` endpoint.
//!
//! ```json
//! {"name": "Fear and Greed Index",
//!  "data": [{"value": "72", "value_classification": "Greed",
//!            "timestamp": "1709251200", "time_until_update": "3600"}]}
//! ```

use chrono::FixedOffset;
use serde::Deserialize;

use crate::domain::time::from_unix;
use crate::domain::IndexReading;
use crate::error::FetchError;

#[derive(Debug, Deserialize)]
struct FngResponse {
    data: Option<Vec<FngEntry>>,
}

#[derive(Debug, Deserialize)]
struct FngEntry {
    value: Option<Scalar>,
    value_classification: Option<String>,
    timestamp: Option<Scalar>,
}

/// The provider sends numbers as strings; accept either.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Number(serde_json::Number),
    Text(String),
}

impl Scalar {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Decode a response body into the most recent reading.
///
/// # Errors
///
/// Returns [`FetchError::Empty`] for an empty data list and
/// [`FetchError::Malformed`] for anything else that is not a complete reading.
pub fn parse_response(body: &str, offset: FixedOffset) -> Result<IndexReading, FetchError> {
    let response: FngResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;

    let entries = response
        .data
        .ok_or_else(|| FetchError::Malformed("missing data".into()))?;
    let latest = entries.into_iter().next().ok_or(FetchError::Empty)?;

    let value = latest
        .value
        .as_ref()
        .and_then(Scalar::as_f64)
        .ok_or_else(|| FetchError::Malformed("missing or non-numeric value".into()))?;
    let classification = latest
        .value_classification
        .ok_or_else(|| FetchError::Malformed("missing value_classification".into()))?;
    let timestamp = latest
        .timestamp
        .as_ref()
        .and_then(Scalar::as_i64)
        .ok_or_else(|| FetchError::Malformed("missing or non-numeric timestamp".into()))?;
    let observed_at = from_unix(timestamp, offset)
        .ok_or_else(|| FetchError::Malformed(format!("timestamp out of range: {timestamp}")))?;

    IndexReading::try_new(value, classification, observed_at)
        .map_err(|e| FetchError::Malformed(e.to_string()))
}
