//! Adapter implementations for agent registry, oracle, and engine ports.

pub mod memory;

mod scoring;

pub use scoring::FixedTaskScorer;
