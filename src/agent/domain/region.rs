//! Validated region tag type.

use super::AgentDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated, uppercase jurisdiction tag assigned at agent creation.
///
/// Regions scope compliance checks (e.g. `ZA`, `US`, `EU-WEST`). The tag is
/// immutable for the lifetime of the agent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Region(String);

impl Region {
    /// Creates a validated region tag.
    ///
    /// The input is trimmed and uppercased. Only characters in `[A-Z0-9_-]`
    /// are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError::EmptyRegion`] when the value is empty
    /// after trimming, or [`AgentDomainError::InvalidRegion`] when it
    /// contains characters outside `[A-Z0-9_-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, AgentDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_uppercase();

        if normalized.is_empty() {
            return Err(AgentDomainError::EmptyRegion);
        }

        let is_valid = normalized
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_' || c == '-');

        if !is_valid {
            return Err(AgentDomainError::InvalidRegion(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the region tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
