//! in-tree kernels: anemoi, baby-jubjub point add and scalar mul
//!
//! same byte layout and status codes as the native library, without the
//! link-time dependency. the plonk verifiers are only available natively.

use zytron_kernels::{anemoi, ed_on_bn254, status_code};

pub use zytron_kernels::{abi, gas};

use crate::{kernel::KernelFns, operation::Operation, KernelSet};

pub const ANEMOI: KernelFns = KernelFns::new(gas::anemoi, anemoi_hash);
pub const POINT_ADD: KernelFns = KernelFns::new(gas::point_add, point_add);
pub const SCALAR_MUL: KernelFns = KernelFns::new(gas::scalar_mul, scalar_mul);

fn anemoi_hash(input: &[u8], output: &mut [u8]) -> u8 {
    status_code(&anemoi::eval_variable_length_hash(input, output))
}

fn point_add(input: &[u8], output: &mut [u8]) -> u8 {
    status_code(&ed_on_bn254::point_add(input, output))
}

fn scalar_mul(input: &[u8], output: &mut [u8]) -> u8 {
    status_code(&ed_on_bn254::scalar_mul(input, output))
}

impl KernelSet {
    /// every operation with an in-tree kernel
    pub fn builtin() -> Self {
        KernelSet::new()
            .with(Operation::Anemoi, ANEMOI)
            .with(Operation::PointAdd, POINT_ADD)
            .with(Operation::ScalarMul, SCALAR_MUL)
    }
}
