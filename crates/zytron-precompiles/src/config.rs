//! registry configuration
//!
//! which operations a chain exposes, and the result-encoding generation it
//! expects. missing fields fall back to the defaults, so an empty document
//! enables everything at the current protocol version.

use serde::{Deserialize, Serialize};

use crate::{error::RegistryError, operation::Operation, PROTOCOL_VERSION};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrecompileConfig {
    /// must equal [`PROTOCOL_VERSION`]
    pub protocol_version: u8,
    /// operations to register; order and duplicates are irrelevant
    pub enabled: Vec<Operation>,
}

impl Default for PrecompileConfig {
    fn default() -> Self {
        Self::all()
    }
}

impl PrecompileConfig {
    /// every operation at the current protocol version
    pub fn all() -> Self {
        Self::only(Operation::ALL)
    }

    pub fn only(ops: impl IntoIterator<Item = Operation>) -> Self {
        Self {
            protocol_version: PROTOCOL_VERSION,
            enabled: ops.into_iter().collect(),
        }
    }

    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.protocol_version != PROTOCOL_VERSION {
            return Err(RegistryError::UnsupportedProtocol(self.protocol_version));
        }
        Ok(())
    }

    pub fn is_enabled(&self, operation: Operation) -> bool {
        self.enabled.contains(&operation)
    }

    /// enabled operations in address order, each once
    pub fn enabled_operations(&self) -> impl Iterator<Item = Operation> + '_ {
        Operation::ALL.into_iter().filter(|op| self.is_enabled(*op))
    }
}
