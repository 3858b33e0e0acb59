//! Identifier and derived name types for the agent domain.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Prefix shared by every derived agent name.
pub const AGENT_NAME_PREFIX: &str = "AI-Agent";

/// Number of leading hexadecimal digits of the identifier carried in the
/// derived name.
const NAME_SUFFIX_LENGTH: usize = 8;

/// Unique identifier for a provisioned agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(Uuid);

impl AgentId {
    /// Creates a new random agent identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an agent identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for AgentId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for AgentId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name derived from an agent identifier.
///
/// Names are not caller-supplied: every agent is named
/// [`AGENT_NAME_PREFIX`] followed by the first eight hexadecimal digits of
/// its identifier (e.g. `AI-Agent-1a2b3c4d`), so the name is a deterministic
/// function of the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentName(String);

impl AgentName {
    /// Derives the display name for the given agent identifier.
    #[must_use]
    pub fn derived_from(id: AgentId) -> Self {
        let digits = id.into_inner().simple().to_string();
        let suffix: String = digits.chars().take(NAME_SUFFIX_LENGTH).collect();
        Self(format!("{AGENT_NAME_PREFIX}-{suffix}"))
    }

    /// Returns the agent name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AgentName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AgentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
