//! Domain validation errors.
//!
//! Returned by `try_new` constructors when an invariant is violated.
//!
//! ```
//! use chrono::{FixedOffset, TimeZone};
//! use greedwatch::domain::error::DomainError;
//! use greedwatch::domain::IndexReading;
//!
//! let tz = FixedOffset::east_opt(8 * 3600).unwrap();
//! let at = tz.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
//! let result = IndexReading::try_new(f64::NAN, "Fear", at);
//! assert!(matches!(result, Err(DomainError::NonFiniteValue { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Index values must be finite numbers.
    #[error("index value must be finite, got {value}")]
    NonFiniteValue {
        /// The rejected value.
        value: f64,
    },

    /// Every reading carries a sentiment label.
    #[error("classification cannot be empty")]
    EmptyClassification,

    /// Recipient ids are opaque but never blank.
    #[error("recipient id cannot be empty")]
    EmptyRecipient,
}
