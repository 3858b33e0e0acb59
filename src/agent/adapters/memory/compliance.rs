//! Configurable in-memory compliance oracle.

use crate::agent::{
    domain::{Capability, Region},
    ports::{ComplianceError, ComplianceOracle},
};
use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};

/// Configurable in-memory compliance oracle.
///
/// Permits everything by default. Tests deny whole regions or individual
/// capabilities within a region.
#[derive(Debug, Clone, Default)]
pub struct InMemoryComplianceOracle {
    state: Arc<RwLock<ComplianceState>>,
}

#[derive(Debug, Default)]
struct ComplianceState {
    denied_regions: HashSet<Region>,
    denied_capabilities: HashMap<Region, HashSet<Capability>>,
}

impl InMemoryComplianceOracle {
    /// Creates an oracle that permits everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Denies every creation targeting the region.
    pub fn deny_region(&self, region: Region) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.denied_regions.insert(region);
    }

    /// Denies one capability within the region.
    pub fn deny_capability_in_region(&self, region: Region, capability: Capability) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state
            .denied_capabilities
            .entry(region)
            .or_default()
            .insert(capability);
    }
}

#[async_trait]
impl ComplianceOracle for InMemoryComplianceOracle {
    async fn validate_for_region(
        &self,
        region: &Region,
        capabilities: &BTreeSet<Capability>,
    ) -> Result<(), ComplianceError> {
        let state = self
            .state
            .read()
            .map_err(|err| ComplianceError::oracle(std::io::Error::other(err.to_string())))?;

        if state.denied_regions.contains(region) {
            return Err(ComplianceError::denied(
                region.clone(),
                "region is not permitted",
            ));
        }

        if let Some(denied) = state.denied_capabilities.get(region)
            && let Some(capability) = capabilities.iter().find(|candidate| denied.contains(*candidate))
        {
            return Err(ComplianceError::denied(
                region.clone(),
                format!("capability {capability} is not permitted"),
            ));
        }

        Ok(())
    }
}
