//! precompile registry
//!
//! static table from the low address byte to a descriptor. built once
//! through [`RegistryBuilder`], read-only afterwards, so it can be shared
//! across threads without locks. lookups fail closed: any address with a
//! non-zero prefix or an unmapped suffix yields `None`.

use std::{fmt, sync::Arc};

use alloy_primitives::{Address, Bytes};

use crate::{
    config::PrecompileConfig,
    context::CallContext,
    descriptor::Precompile,
    error::{RegistryError, Result},
    kernel::{KernelSet, NativeKernel},
    operation::{address_suffix, Operation},
};

const SLOTS: usize = 256;

/// immutable address → descriptor map
#[derive(Clone)]
pub struct PrecompileRegistry {
    slots: Vec<Option<Precompile>>,
    /// registered suffixes in ascending order
    order: Vec<u8>,
}

impl PrecompileRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// registry exposing the operations `config` enables, using `kernels`
    pub fn from_config(
        config: &PrecompileConfig,
        kernels: &KernelSet,
    ) -> std::result::Result<Self, RegistryError> {
        config.validate()?;

        let mut builder = RegistryBuilder::new();
        for op in config.enabled_operations() {
            let kernel = kernels.get(op).ok_or(RegistryError::MissingKernel(op))?;
            builder = builder.register(op, Arc::clone(kernel))?;
        }

        let registry = builder.build();
        tracing::info!(
            precompiles = registry.len(),
            protocol = config.protocol_version,
            "precompile registry ready"
        );
        Ok(registry)
    }

    pub fn get(&self, address: &Address) -> Option<&Precompile> {
        self.get_by_suffix(address_suffix(address)?)
    }

    pub fn get_by_suffix(&self, suffix: u8) -> Option<&Precompile> {
        self.slots[suffix as usize].as_ref()
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.get(address).is_some()
    }

    /// descriptors in address order
    pub fn iter(&self) -> impl Iterator<Item = &Precompile> + '_ {
        self.order.iter().filter_map(|s| self.get_by_suffix(*s))
    }

    pub fn addresses(&self) -> impl Iterator<Item = Address> + '_ {
        self.iter().map(Precompile::address)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// gas for calling `address`, `None` if nothing is registered there
    pub fn required_gas(&self, address: &Address, input: &[u8]) -> Option<u64> {
        self.get(address).map(|p| p.required_gas(input))
    }

    /// resolve, execute and encode in one step
    ///
    /// `None` means the address is not a precompile; routing such calls is
    /// the host's decision.
    pub fn call(&self, address: &Address, input: &[u8], ctx: &CallContext) -> Option<Result<Bytes>> {
        self.get(address).map(|p| p.call(input, ctx))
    }
}

impl fmt::Debug for PrecompileRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// collects descriptors, rejecting duplicate addresses
pub struct RegistryBuilder {
    slots: Vec<Option<Precompile>>,
}

impl fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field(
                "registered",
                &self.slots.iter().flatten().map(Precompile::operation).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            slots: vec![None; SLOTS],
        }
    }

    pub fn register(
        self,
        operation: Operation,
        kernel: Arc<dyn NativeKernel>,
    ) -> std::result::Result<Self, RegistryError> {
        self.insert(Precompile::new(operation, kernel))
    }

    pub fn insert(mut self, precompile: Precompile) -> std::result::Result<Self, RegistryError> {
        let suffix = precompile.operation().address_suffix();
        let slot = &mut self.slots[suffix as usize];
        if slot.is_some() {
            return Err(RegistryError::DuplicateAddress(suffix));
        }
        *slot = Some(precompile);
        Ok(self)
    }

    pub fn build(self) -> PrecompileRegistry {
        let order = (0..SLOTS)
            .filter(|i| self.slots[*i].is_some())
            .map(|i| i as u8)
            .collect();
        PrecompileRegistry {
            slots: self.slots,
            order,
        }
    }
}
