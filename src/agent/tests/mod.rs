//! Unit tests for the agent bounded context.
