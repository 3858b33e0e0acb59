//! In-memory adapters for tests and local development.

mod agent_registry;
mod compliance;
mod inference;
mod security;

pub use agent_registry::InMemoryAgentRegistry;
pub use compliance::InMemoryComplianceOracle;
pub use inference::InMemoryInferenceEngine;
pub use security::InMemorySecurityOracle;
