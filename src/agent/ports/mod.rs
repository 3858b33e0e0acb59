//! Port contracts for agent orchestration.
//!
//! Ports define infrastructure-agnostic interfaces used by the agent
//! services: the canonical record registry, the security and compliance
//! oracles, the inference engine, and the task scoring hook.

pub mod compliance;
pub mod inference;
pub mod registry;
pub mod scoring;
pub mod security;

pub use compliance::{ComplianceError, ComplianceOracle};
pub use inference::{InferenceEngine, ModelInitError, TaskExecutionError};
pub use registry::{AgentFilter, AgentMutation, AgentRegistry, AgentRegistryError, AgentRegistryResult};
pub use scoring::{TaskScorer, TaskScores};
pub use security::{SecurityError, SecurityEvent, SecurityOracle};
