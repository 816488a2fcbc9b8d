//! Push target identifier.

use std::fmt;

use super::error::DomainError;

/// Opaque identifier of the single push target (a LINE user id).
///
/// The inner String is private so construction goes through [`RecipientId::try_new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecipientId(String);

impl RecipientId {
    /// Create a recipient id, rejecting blank input.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyRecipient`] when `id` is empty or whitespace.
    pub fn try_new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyRecipient);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the recipient id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
