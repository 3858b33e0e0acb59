//! Registry port for the canonical agent record store.

use crate::agent::domain::{Agent, AgentId, AgentStatus, AgentType, Region};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for agent registry operations.
pub type AgentRegistryResult<T> = Result<T, AgentRegistryError>;

/// Mutation applied to a stored agent record under the registry's lock.
///
/// Funnelling every write through a closure keeps the registry the single
/// owner of agent state: callers never hold a mutable copy that can diverge
/// from the stored record.
pub type AgentMutation = Box<dyn FnOnce(&mut Agent) + Send>;

/// Canonical agent record store contract.
#[async_trait]
pub trait AgentRegistry: Send + Sync {
    /// Stores a new agent record.
    ///
    /// # Errors
    ///
    /// Returns [`AgentRegistryError::DuplicateAgent`] when the agent ID
    /// already exists.
    async fn store(&self, agent: &Agent) -> AgentRegistryResult<()>;

    /// Finds an agent record by identifier.
    ///
    /// Returns `None` when the agent does not exist.
    async fn find_by_id(&self, id: AgentId) -> AgentRegistryResult<Option<Agent>>;

    /// Returns a snapshot of agent records matching the filter, in
    /// insertion order.
    async fn list(&self, filter: &AgentFilter) -> AgentRegistryResult<Vec<Agent>>;

    /// Applies a mutation to a stored record, atomically with respect to
    /// other updates, and returns the updated snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AgentRegistryError::AgentNotFound`] when the agent does
    /// not exist.
    async fn update(&self, id: AgentId, mutation: AgentMutation) -> AgentRegistryResult<Agent>;
}

/// Optional equality predicates combined with AND when listing agents.
///
/// The default filter matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentFilter {
    status: Option<AgentStatus>,
    agent_type: Option<AgentType>,
    region: Option<Region>,
}

impl AgentFilter {
    /// Creates a filter matching every record.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: None,
            agent_type: None,
            region: None,
        }
    }

    /// Restricts matches to records with the given status.
    #[must_use]
    pub const fn with_status(mut self, status: AgentStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts matches to records with the given agent type.
    #[must_use]
    pub fn with_agent_type(mut self, agent_type: AgentType) -> Self {
        self.agent_type = Some(agent_type);
        self
    }

    /// Restricts matches to records in the given region.
    #[must_use]
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Returns whether the agent satisfies every configured predicate.
    #[must_use]
    pub fn matches(&self, agent: &Agent) -> bool {
        self.status.is_none_or(|status| agent.status() == status)
            && self
                .agent_type
                .as_ref()
                .is_none_or(|agent_type| agent.agent_type() == agent_type)
            && self
                .region
                .as_ref()
                .is_none_or(|region| agent.region() == region)
    }
}

/// Errors returned by agent registry implementations.
#[derive(Debug, Clone, Error)]
pub enum AgentRegistryError {
    /// An agent with the same identifier already exists.
    #[error("duplicate agent identifier: {0}")]
    DuplicateAgent(AgentId),

    /// The agent was not found.
    #[error("agent not found: {0}")]
    AgentNotFound(AgentId),

    /// Storage-layer failure.
    #[error("registry storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl AgentRegistryError {
    /// Wraps a storage-layer error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
