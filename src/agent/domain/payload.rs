//! Opaque task input and output envelopes.

use serde::{Deserialize, Serialize};

/// Input payload submitted for a task execution.
///
/// The payload is opaque to the orchestrator and is passed through to the
/// anti-fraud check and the inference engine unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskPayload(serde_json::Value);

impl TaskPayload {
    /// Wraps a JSON value as a task payload.
    #[must_use]
    pub const fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Returns the wrapped JSON value.
    #[must_use]
    pub const fn value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Consumes the payload, returning the wrapped JSON value.
    #[must_use]
    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}

/// Output produced by a successful task execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskResult(serde_json::Value);

impl TaskResult {
    /// Wraps a JSON value as a task result.
    #[must_use]
    pub const fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Returns the wrapped JSON value.
    #[must_use]
    pub const fn value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Consumes the result, returning the wrapped JSON value.
    #[must_use]
    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}
