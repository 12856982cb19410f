//! C ABI exports for the in-tree kernels
//!
//! symbol names and signatures match what the host declares. inputs cross as
//! `(ptr, len)`; outputs are written into a caller-owned buffer of exactly
//! [`DIGEST_LEN`] (anemoi) or [`POINT_LEN`] (curve) bytes. a null or empty
//! input is answered with the input error status without touching the
//! pointer.

use core::slice;

use crate::{
    anemoi::{self, DIGEST_LEN},
    ed_on_bn254::{self, POINT_LEN},
    gas, status_code, KernelError,
};

/// borrow the input buffer, refusing null or empty input
///
/// # Safety
/// `data_ptr` must be valid for reads of `data_len` bytes when non-null.
unsafe fn input<'a>(data_ptr: *const u8, data_len: usize) -> Option<&'a [u8]> {
    if data_ptr.is_null() || data_len == 0 {
        return None;
    }
    Some(slice::from_raw_parts(data_ptr, data_len))
}

/// # Safety
/// `data_ptr` must be valid for `data_len` bytes and `ret_val` valid for
/// writes of 32 bytes.
#[no_mangle]
pub unsafe extern "C" fn __precompile_anemoi(
    data_ptr: *const u8,
    data_len: usize,
    ret_val: *mut u8,
) -> u8 {
    let Some(data) = input(data_ptr, data_len) else {
        return KernelError::Input.code();
    };
    if ret_val.is_null() {
        return KernelError::Serialize.code();
    }
    let ret = slice::from_raw_parts_mut(ret_val, DIGEST_LEN);

    status_code(&anemoi::eval_variable_length_hash(data, ret))
}

/// # Safety
/// `data_ptr` must be valid for `data_len` bytes when non-null.
#[no_mangle]
pub unsafe extern "C" fn __precompile_anemoi_gas(data_ptr: *const u8, data_len: usize) -> u64 {
    input(data_ptr, data_len).map(gas::anemoi).unwrap_or(0)
}

/// # Safety
/// `data_ptr` must be valid for `data_len` bytes and `ret_val` valid for
/// writes of 64 bytes.
#[no_mangle]
pub unsafe extern "C" fn __precompile_ed_on_bn254_point_add(
    data_ptr: *const u8,
    data_len: usize,
    ret_val: *mut u8,
) -> u8 {
    let Some(data) = input(data_ptr, data_len) else {
        return KernelError::Input.code();
    };
    if ret_val.is_null() {
        return KernelError::Serialize.code();
    }
    let ret = slice::from_raw_parts_mut(ret_val, POINT_LEN);

    status_code(&ed_on_bn254::point_add(data, ret))
}

/// # Safety
/// `data_ptr` must be valid for `data_len` bytes when non-null.
#[no_mangle]
pub unsafe extern "C" fn __precompile_ed_on_bn254_point_add_gas(
    data_ptr: *const u8,
    data_len: usize,
) -> u64 {
    input(data_ptr, data_len).map(gas::point_add).unwrap_or(0)
}

/// # Safety
/// `data_ptr` must be valid for `data_len` bytes and `ret_val` valid for
/// writes of 64 bytes.
#[no_mangle]
pub unsafe extern "C" fn __precompile_ed_on_bn254_scalar_mul(
    data_ptr: *const u8,
    data_len: usize,
    ret_val: *mut u8,
) -> u8 {
    let Some(data) = input(data_ptr, data_len) else {
        return KernelError::Input.code();
    };
    if ret_val.is_null() {
        return KernelError::Serialize.code();
    }
    let ret = slice::from_raw_parts_mut(ret_val, POINT_LEN);

    status_code(&ed_on_bn254::scalar_mul(data, ret))
}

/// # Safety
/// `data_ptr` must be valid for `data_len` bytes when non-null.
#[no_mangle]
pub unsafe extern "C" fn __precompile_ed_on_bn254_scalar_mul_gas(
    data_ptr: *const u8,
    data_len: usize,
) -> u64 {
    input(data_ptr, data_len).map(gas::scalar_mul).unwrap_or(0)
}
