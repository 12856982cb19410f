//! host-forwarded call metadata

use alloy_primitives::{Address, Bytes, U256};

/// caller / value / context tuple some hosts thread through every call
///
/// the bridge accepts it so one descriptor serves hosts that do and do not
/// supply it, but never reads it: results depend on the input bytes alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallContext {
    /// account invoking the precompile
    pub caller: Address,
    /// value transferred with the call
    pub value: U256,
    /// host-specific opaque context
    pub data: Bytes,
}

impl CallContext {
    pub fn new(caller: Address, value: U256) -> Self {
        Self {
            caller,
            value,
            data: Bytes::new(),
        }
    }

    pub fn with_data(mut self, data: impl Into<Bytes>) -> Self {
        self.data = data.into();
        self
    }
}
