use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::CapacitySource;
use crate::config::ConfigError;
use crate::types::identifiers::ContainerId;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("No capacity configured for container: {0}")]
    UnknownContainer(ContainerId),
}

/// Raw slot counts per container, as configured upstream.
///
/// Values are kept signed; clamping happens when they become a `Capacity`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerCatalog {
    capacities: BTreeMap<ContainerId, i64>,
}

impl ContainerCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, container: ContainerId, capacity: i64) {
        self.capacities.insert(container, capacity);
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

impl CapacitySource for ContainerCatalog {
    type Error = CatalogError;

    fn capacity(&self, container: &ContainerId) -> Result<i64, Self::Error> {
        self.capacities
            .get(container)
            .copied()
            .ok_or_else(|| CatalogError::UnknownContainer(container.clone()))
    }
}
