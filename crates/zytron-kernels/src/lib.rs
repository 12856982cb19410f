//! zytron-kernels: native kernels behind the zytron precompiles
//!
//! every kernel is a pure function over an input byte buffer that either
//! fills a fixed-size output buffer or only reports a status. the status is a
//! single byte shared by all kernels (see [`KernelError::code`]).
//!
//! in-tree kernels:
//! - anemoi-jive variable-length hash over the bn254 scalar field
//! - baby-jubjub (`ed_on_bn254`) point addition and scalar multiplication
//! - the gas schedule for every precompile, including the plonk verifiers
//!   whose kernels live in the external native library
//!
//! with the `ffi` feature the in-tree kernels are also exported under the C
//! ABI symbol names the host links against.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod abi;
pub mod anemoi;
pub mod ed_on_bn254;
mod error;
pub mod gas;

#[cfg(feature = "ffi")]
pub mod ffi;

pub use error::{status_code, KernelError, Result};

/// status byte for a successful kernel call
pub const STATUS_OK: u8 = 0;
