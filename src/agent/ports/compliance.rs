//! Compliance oracle port: region-scoped capability vetting.

use crate::agent::domain::{Capability, Region};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;

/// Regulatory vetting contract for agent creation.
#[async_trait]
pub trait ComplianceOracle: Send + Sync {
    /// Checks that the declared capabilities are permitted in the region.
    ///
    /// # Errors
    ///
    /// Returns [`ComplianceError::Denied`] when the combination is not
    /// permitted, or [`ComplianceError::Oracle`] when the oracle itself
    /// fails.
    async fn validate_for_region(
        &self,
        region: &Region,
        capabilities: &BTreeSet<Capability>,
    ) -> Result<(), ComplianceError>;
}

/// Errors returned by compliance oracle implementations.
#[derive(Debug, Clone, Error)]
pub enum ComplianceError {
    /// The capability set is not permitted in the region.
    #[error("compliance denied in region {region}: {reason}")]
    Denied {
        /// Region the check ran against.
        region: Region,
        /// Oracle-supplied denial reason.
        reason: String,
    },

    /// The oracle itself failed.
    #[error("compliance oracle failure: {0}")]
    Oracle(Arc<dyn std::error::Error + Send + Sync>),
}

impl ComplianceError {
    /// Creates a denial for the given region.
    pub fn denied(region: Region, reason: impl Into<String>) -> Self {
        Self::Denied {
            region,
            reason: reason.into(),
        }
    }

    /// Wraps an oracle infrastructure error.
    pub fn oracle(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Oracle(Arc::new(err))
    }
}
