//! In-memory agent registry.

use crate::agent::{
    domain::{Agent, AgentId},
    ports::{AgentFilter, AgentMutation, AgentRegistry, AgentRegistryError, AgentRegistryResult},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory agent registry.
///
/// Listings replay insertion order, so the oldest agent always comes
/// first regardless of filter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAgentRegistry {
    state: Arc<RwLock<RegistryState>>,
}

#[derive(Debug, Default)]
struct RegistryState {
    agents: HashMap<AgentId, Agent>,
    order: Vec<AgentId>,
}

impl InMemoryAgentRegistry {
    /// Creates an empty in-memory registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AgentRegistry for InMemoryAgentRegistry {
    async fn store(&self, agent: &Agent) -> AgentRegistryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| AgentRegistryError::storage(std::io::Error::other(err.to_string())))?;

        if state.agents.contains_key(&agent.id()) {
            return Err(AgentRegistryError::DuplicateAgent(agent.id()));
        }

        state.order.push(agent.id());
        state.agents.insert(agent.id(), agent.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: AgentId) -> AgentRegistryResult<Option<Agent>> {
        let state = self
            .state
            .read()
            .map_err(|err| AgentRegistryError::storage(std::io::Error::other(err.to_string())))?;
        Ok(state.agents.get(&id).cloned())
    }

    async fn list(&self, filter: &AgentFilter) -> AgentRegistryResult<Vec<Agent>> {
        let state = self
            .state
            .read()
            .map_err(|err| AgentRegistryError::storage(std::io::Error::other(err.to_string())))?;
        let agents = state
            .order
            .iter()
            .filter_map(|id| state.agents.get(id))
            .filter(|agent| filter.matches(agent))
            .cloned()
            .collect();
        Ok(agents)
    }

    async fn update(&self, id: AgentId, mutation: AgentMutation) -> AgentRegistryResult<Agent> {
        let mut state = self
            .state
            .write()
            .map_err(|err| AgentRegistryError::storage(std::io::Error::other(err.to_string())))?;
        let record = state
            .agents
            .get_mut(&id)
            .ok_or(AgentRegistryError::AgentNotFound(id))?;
        mutation(record);
        Ok(record.clone())
    }
}
