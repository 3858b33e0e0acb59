//! Error types for agent domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing agent domain values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AgentDomainError {
    /// The task descriptor is empty after trimming.
    #[error("agent task descriptor must not be empty")]
    EmptyTaskDescriptor,

    /// The agent type is empty after trimming.
    #[error("agent type must not be empty")]
    EmptyAgentType,

    /// A capability tag is empty after trimming.
    #[error("capability tag must not be empty")]
    EmptyCapability,

    /// A capability tag contains characters outside `[a-z0-9_-]`.
    #[error(
        "capability tag '{0}' contains invalid characters (only lowercase alphanumeric, underscores, and hyphens allowed)"
    )]
    InvalidCapability(String),

    /// The region tag is empty after trimming.
    #[error("region tag must not be empty")]
    EmptyRegion,

    /// The region tag contains characters outside `[A-Z0-9_-]`.
    #[error(
        "region tag '{0}' contains invalid characters (only uppercase alphanumeric, underscores, and hyphens allowed)"
    )]
    InvalidRegion(String),

    /// A score lies outside the unit interval.
    #[error("score {0} is outside the unit interval [0, 1]")]
    ScoreOutOfRange(f64),
}

/// Error returned while parsing an agent status from its storage form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown agent status: {0}")]
pub struct ParseAgentStatusError(pub String);
