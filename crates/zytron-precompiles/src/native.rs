//! bindings to the external native kernel library
//!
//! links `libprecompiles`, which exports one `(gas, exec)` symbol pair per
//! operation; both verifiers share the plonk gas estimator. every wrapper
//! checks the input is non-empty and the output buffer has the kernel's
//! fixed width before handing out raw pointers, so a kernel that
//! unconditionally reads its first input byte or writes its full output is
//! never given a dangling or short buffer.

use crate::{
    kernel::KernelFns,
    operation::{Operation, ANEMOI_OUTPUT_LEN, POINT_LEN},
    status::Status,
    KernelSet,
};

#[link(name = "precompiles")]
extern "C" {
    fn __precompile_anemoi_gas(data_ptr: *const u8, data_len: usize) -> u64;
    fn __precompile_anemoi(data_ptr: *const u8, data_len: usize, ret_val: *mut u8) -> u8;

    fn __precompile_ed_on_bn254_point_add_gas(data_ptr: *const u8, data_len: usize) -> u64;
    fn __precompile_ed_on_bn254_point_add(
        data_ptr: *const u8,
        data_len: usize,
        ret_val: *mut u8,
    ) -> u8;

    fn __precompile_ed_on_bn254_scalar_mul_gas(data_ptr: *const u8, data_len: usize) -> u64;
    fn __precompile_ed_on_bn254_scalar_mul(
        data_ptr: *const u8,
        data_len: usize,
        ret_val: *mut u8,
    ) -> u8;

    fn __precompile_plonk_verify_gas(data_ptr: *const u8, data_len: usize) -> u64;
    fn __precompile_verify_matchmaking(data_ptr: *const u8, data_len: usize) -> u8;
    fn __precompile_verify_shuffle(data_ptr: *const u8, data_len: usize) -> u8;
}

pub const ANEMOI: KernelFns = KernelFns::new(anemoi_gas, anemoi);
pub const POINT_ADD: KernelFns = KernelFns::new(point_add_gas, point_add);
pub const SCALAR_MUL: KernelFns = KernelFns::new(scalar_mul_gas, scalar_mul);
pub const VERIFY_MATCHMAKING: KernelFns = KernelFns::new(plonk_verify_gas, verify_matchmaking);
pub const VERIFY_SHUFFLE: KernelFns = KernelFns::new(plonk_verify_gas, verify_shuffle);

const INPUT_ERROR: u8 = Status::Input.code();
const SERIALIZE_ERROR: u8 = Status::Serialize.code();

// ============================================================================
// GAS
// ============================================================================

fn anemoi_gas(input: &[u8]) -> u64 {
    if input.is_empty() {
        return 0;
    }
    unsafe { __precompile_anemoi_gas(input.as_ptr(), input.len()) }
}

fn point_add_gas(input: &[u8]) -> u64 {
    if input.is_empty() {
        return 0;
    }
    unsafe { __precompile_ed_on_bn254_point_add_gas(input.as_ptr(), input.len()) }
}

fn scalar_mul_gas(input: &[u8]) -> u64 {
    if input.is_empty() {
        return 0;
    }
    unsafe { __precompile_ed_on_bn254_scalar_mul_gas(input.as_ptr(), input.len()) }
}

fn plonk_verify_gas(input: &[u8]) -> u64 {
    if input.is_empty() {
        return 0;
    }
    unsafe { __precompile_plonk_verify_gas(input.as_ptr(), input.len()) }
}

// ============================================================================
// EXECUTE
// ============================================================================

fn anemoi(input: &[u8], output: &mut [u8]) -> u8 {
    if input.is_empty() {
        return INPUT_ERROR;
    }
    if output.len() != ANEMOI_OUTPUT_LEN {
        return SERIALIZE_ERROR;
    }
    unsafe { __precompile_anemoi(input.as_ptr(), input.len(), output.as_mut_ptr()) }
}

fn point_add(input: &[u8], output: &mut [u8]) -> u8 {
    if input.is_empty() {
        return INPUT_ERROR;
    }
    if output.len() != POINT_LEN {
        return SERIALIZE_ERROR;
    }
    unsafe { __precompile_ed_on_bn254_point_add(input.as_ptr(), input.len(), output.as_mut_ptr()) }
}

fn scalar_mul(input: &[u8], output: &mut [u8]) -> u8 {
    if input.is_empty() {
        return INPUT_ERROR;
    }
    if output.len() != POINT_LEN {
        return SERIALIZE_ERROR;
    }
    unsafe { __precompile_ed_on_bn254_scalar_mul(input.as_ptr(), input.len(), output.as_mut_ptr()) }
}

fn verify_matchmaking(input: &[u8], _output: &mut [u8]) -> u8 {
    if input.is_empty() {
        return INPUT_ERROR;
    }
    unsafe { __precompile_verify_matchmaking(input.as_ptr(), input.len()) }
}

fn verify_shuffle(input: &[u8], _output: &mut [u8]) -> u8 {
    if input.is_empty() {
        return INPUT_ERROR;
    }
    unsafe { __precompile_verify_shuffle(input.as_ptr(), input.len()) }
}

impl KernelSet {
    /// all five operations from the linked native library
    pub fn native() -> Self {
        KernelSet::new()
            .with(Operation::Anemoi, ANEMOI)
            .with(Operation::PointAdd, POINT_ADD)
            .with(Operation::ScalarMul, SCALAR_MUL)
            .with(Operation::VerifyMatchmaking, VERIFY_MATCHMAKING)
            .with(Operation::VerifyShuffle, VERIFY_SHUFFLE)
    }
}
