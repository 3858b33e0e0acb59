//! Agent lifecycle and task execution orchestration for Karajan.
//!
//! This module implements the agent bounded context: provisioning agent
//! records gated by security and compliance checks, executing standing
//! tasks with per-agent serialization, and aggregating task performance.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
