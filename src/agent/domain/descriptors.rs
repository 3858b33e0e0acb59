//! Caller-supplied agent descriptors.

use super::AgentDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-form description of the standing task an agent executes.
///
/// The descriptor is opaque to the orchestrator; it is validated for shape
/// only and passed through to the inference engine unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskDescriptor(String);

impl TaskDescriptor {
    /// Creates a validated task descriptor.
    ///
    /// The input is trimmed; case is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError::EmptyTaskDescriptor`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, AgentDomainError> {
        let trimmed = value.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(AgentDomainError::EmptyTaskDescriptor);
        }
        Ok(Self(trimmed))
    }

    /// Returns the descriptor as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskDescriptor {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form agent type descriptor (e.g. `support`, `analytics`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentType(String);

impl AgentType {
    /// Creates a validated agent type descriptor.
    ///
    /// The input is trimmed; case is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError::EmptyAgentType`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, AgentDomainError> {
        let trimmed = value.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(AgentDomainError::EmptyAgentType);
        }
        Ok(Self(trimmed))
    }

    /// Returns the agent type as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AgentType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
