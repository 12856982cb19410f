//! gas schedule
//!
//! every estimator is a pure function of the input bytes and never fails:
//! malformed input is priced like any other input and rejected later by the
//! kernel itself.

use crate::abi::WORD_LEN;

/// cost of absorbing one 32-byte word into the anemoi sponge
pub const ANEMOI_EVAL: u64 = 100;

/// flat cost of a baby-jubjub point addition
pub const POINT_ADD_GAS: u64 = 100;

/// flat cost of a baby-jubjub scalar multiplication
pub const SCALAR_MUL_GAS: u64 = 200;

/// flat cost of a plonk verification (matchmaking and shuffle share it)
pub const PLONK_VERIFY_BASE: u64 = 100;

pub fn anemoi(input: &[u8]) -> u64 {
    (input.len() / WORD_LEN) as u64 * ANEMOI_EVAL
}

pub fn point_add(_input: &[u8]) -> u64 {
    POINT_ADD_GAS
}

pub fn scalar_mul(_input: &[u8]) -> u64 {
    SCALAR_MUL_GAS
}

pub fn plonk_verify(_input: &[u8]) -> u64 {
    PLONK_VERIFY_BASE
}
