//! Validated capability tag type.

use super::AgentDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated, lowercase capability tag declared at agent creation.
///
/// Capability tags are open-ended strings rather than a closed set, so new
/// agent abilities can be declared without code changes (e.g. `chat`,
/// `sentiment-analysis`, `translation`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capability(String);

impl Capability {
    /// Creates a validated capability tag.
    ///
    /// The input is trimmed and lowercased. Only characters in `[a-z0-9_-]`
    /// are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError::EmptyCapability`] when the value is empty
    /// after trimming, or [`AgentDomainError::InvalidCapability`] when it
    /// contains characters outside `[a-z0-9_-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, AgentDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return Err(AgentDomainError::EmptyCapability);
        }

        let is_valid = normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');

        if !is_valid {
            return Err(AgentDomainError::InvalidCapability(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the capability tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Capability {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
