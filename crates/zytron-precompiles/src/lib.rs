//! zytron-precompiles: fixed-address precompiled contracts over native kernels
//!
//! lets a virtual-machine host treat opaque native cryptographic routines as
//! ordinary contract calls. each operation gets a [`Precompile`] descriptor
//! binding a registry address, a gas estimator and an executor; the
//! [`PrecompileRegistry`] maps addresses to descriptors.
//!
//! | address | operation | output |
//! |---------|-----------|--------|
//! | `0x..14` | anemoi variable-length hash | 32-byte digest |
//! | `0x..15` | baby-jubjub point addition | 64-byte point |
//! | `0x..16` | baby-jubjub scalar multiplication | 64-byte point |
//! | `0x..17` | matchmaking proof verification | abi `bool` |
//! | `0x..18` | shuffle proof verification | abi `bool` |
//!
//! ## calling convention
//!
//! 1. host resolves the address through the registry
//! 2. host charges [`Precompile::required_gas`]
//! 3. host calls [`Precompile::execute`] and encodes the output
//! 4. any [`PrecompileError`] reverts the call
//!
//! kernel status travels out-of-band: it never overwrites payload bytes. a
//! rejected proof is a well-formed `false`, not an error.
//!
//! ## kernels
//!
//! kernels are capability records ([`KernelFns`]) or any [`NativeKernel`]
//! implementation, collected in a [`KernelSet`] once at startup:
//! - `builtin` (default): in-tree anemoi, point add and scalar mul
//!   ([`KernelSet::builtin`]); the plonk verifiers still come from elsewhere
//! - `native`: all five operations from the linked `libprecompiles`
//!
//! ```ignore
//! use zytron_precompiles::{CallContext, KernelSet, PrecompileConfig, PrecompileRegistry};
//!
//! let registry = PrecompileRegistry::from_config(&PrecompileConfig::default(), &KernelSet::native())?;
//! let precompile = registry.get(&address).expect("routed by host");
//! let gas = precompile.required_gas(&input);
//! let output = precompile.execute(&input, &CallContext::default())?;
//! let return_data = output.encode();
//! ```

pub mod config;
pub mod context;
pub mod descriptor;
pub mod encoder;
mod error;
pub mod kernel;
pub mod operation;
pub mod registry;
pub mod status;

#[cfg(feature = "builtin")]
pub mod builtin;

#[cfg(feature = "native")]
pub mod native;


pub use config::PrecompileConfig;
pub use context::CallContext;
pub use descriptor::Precompile;
pub use encoder::PrecompileOutput;
pub use error::{ErrorClass, InputError, PrecompileError, RegistryError, Result};
pub use kernel::{KernelFns, KernelSet, NativeKernel};
pub use operation::{Operation, OutputKind};
pub use registry::{PrecompileRegistry, RegistryBuilder};
pub use status::Status;

/// result-encoding generation implemented by this crate
///
/// v2: out-of-band status, abi boolean predicates, 32-byte anemoi digest.
pub const PROTOCOL_VERSION: u8 = 2;
