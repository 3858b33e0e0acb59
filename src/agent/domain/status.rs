//! Agent lifecycle status.

use super::ParseAgentStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a provisioned agent.
///
/// There are no terminal states: [`AgentStatus::Completed`] and
/// [`AgentStatus::Error`] both re-enter [`AgentStatus::Processing`] when the
/// next task execution begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    /// The agent record exists but has not yet executed a task.
    Initializing,
    /// A task execution is in flight.
    Processing,
    /// The most recent task execution succeeded.
    Completed,
    /// The most recent task execution failed.
    Error,
}

impl AgentStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initializing => "initializing",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Error => "error",
        }
    }

    /// Returns whether the status may legally change to `next`.
    ///
    /// Execution begins from any quiescent status; a processing agent
    /// settles into either outcome status.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (
                Self::Initializing | Self::Completed | Self::Error,
                Self::Processing
            ) | (Self::Processing, Self::Completed | Self::Error)
        )
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for AgentStatus {
    type Error = ParseAgentStatusError;

    fn try_from(value: &str) -> Result<Self, ParseAgentStatusError> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "initializing" => Ok(Self::Initializing),
            "processing" => Ok(Self::Processing),
            "completed" => Ok(Self::Completed),
            "error" => Ok(Self::Error),
            _ => Err(ParseAgentStatusError(value.to_owned())),
        }
    }
}
