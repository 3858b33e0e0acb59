//! Karajan: agent lifecycle and task execution orchestration.
//!
//! This crate provides the core functionality for provisioning AI agents,
//! gating them through security and compliance oracles, executing their
//! standing tasks against an inference engine, and aggregating per-agent
//! performance.
//!
//! # Architecture
//!
//! Karajan follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory references)
//!
//! # Modules
//!
//! - [`agent`]: Agent provisioning, validation, task execution, and
//!   performance tracking

pub mod agent;
