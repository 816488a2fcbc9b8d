//! A single observation of the Fear & Greed index.

use chrono::{DateTime, FixedOffset};

use super::error::DomainError;

/// One Fear & Greed index sample.
///
/// Immutable once constructed. Produced fresh by every fetch and never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexReading {
    value: f64,
    classification: String,
    observed_at: DateTime<FixedOffset>,
}

impl IndexReading {
    /// Build a reading, validating the value and label.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonFiniteValue`] for NaN or infinite values and
    /// [`DomainError::EmptyClassification`] for a blank label.
    pub fn try_new(
        value: f64,
        classification: impl Into<String>,
        observed_at: DateTime<FixedOffset>,
    ) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::NonFiniteValue { value });
        }
        let classification = classification.into().trim().to_string();
        if classification.is_empty() {
            return Err(DomainError::EmptyClassification);
        }
        Ok(Self {
            value,
            classification,
            observed_at,
        })
    }

    /// Index value, 0 (extreme fear) to 100 (extreme greed).
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Provider's label for the value, e.g. "Extreme Fear".
    pub fn classification(&self) -> &str {
        &self.classification
    }

    /// When the provider published this value, in the bot's local timezone.
    pub fn observed_at(&self) -> DateTime<FixedOffset> {
        self.observed_at
    }
}
