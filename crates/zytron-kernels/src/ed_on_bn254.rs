//! baby-jubjub curve kernels
//!
//! twisted edwards curve over the bn254 scalar field (`ark-ed-on-bn254`).
//! points travel as two abi words `x || y`, big-endian, each coordinate
//! reduced modulo the base field. decoded points must lie on the curve and
//! in the prime-order subgroup, otherwise the kernel reports
//! [`KernelError::Deserialize`].
//!
//! supported:
//! 1. point add: `(x1, y1, x2, y2) -> x || y`
//! 2. scalar mul: `(s, x, y) -> x || y`

use ark_ec::{AffineRepr, CurveGroup};
use ark_ed_on_bn254::{EdwardsAffine, Fq, Fr};
use ark_ff::{BigInteger, PrimeField};

use crate::{
    abi::{self, WORD_LEN},
    KernelError, Result,
};

/// encoded point width (two coordinates)
pub const POINT_LEN: usize = 2 * WORD_LEN;

/// input width of a point addition
pub const POINT_ADD_INPUT_LEN: usize = 4 * WORD_LEN;

/// input width of a scalar multiplication
pub const SCALAR_MUL_INPUT_LEN: usize = 3 * WORD_LEN;

/// add two encoded points, writing `x || y` into `ret`
pub fn point_add(data: &[u8], ret: &mut [u8]) -> Result<()> {
    let [x1, y1, x2, y2] = abi::decode_words::<4>(data)?;
    let p1 = decode_point(&x1, &y1)?;
    let p2 = decode_point(&x2, &y2)?;

    let sum = (p1 + p2).into_affine();
    write_point(&sum, ret)
}

/// multiply an encoded point by a scalar, writing `x || y` into `ret`
pub fn scalar_mul(data: &[u8], ret: &mut [u8]) -> Result<()> {
    let [s, x, y] = abi::decode_words::<3>(data)?;
    let scalar = Fr::from_be_bytes_mod_order(&s);
    let point = decode_point(&x, &y)?;

    let product = (point * scalar).into_affine();
    write_point(&product, ret)
}

/// parse a point from its coordinate words
pub fn decode_point(x: &[u8; WORD_LEN], y: &[u8; WORD_LEN]) -> Result<EdwardsAffine> {
    let x = Fq::from_be_bytes_mod_order(x);
    let y = Fq::from_be_bytes_mod_order(y);

    let point = EdwardsAffine::new_unchecked(x, y);
    if !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(KernelError::Deserialize);
    }

    Ok(point)
}

/// encode a point as `x || y`
pub fn encode_point(point: &EdwardsAffine) -> Result<[u8; POINT_LEN]> {
    let mut out = [0u8; POINT_LEN];
    write_point(point, &mut out)?;
    Ok(out)
}

fn write_point(point: &EdwardsAffine, ret: &mut [u8]) -> Result<()> {
    if ret.len() != POINT_LEN {
        return Err(KernelError::Serialize);
    }

    let x = abi::left_pad(&point.x.into_bigint().to_bytes_be())?;
    let y = abi::left_pad(&point.y.into_bigint().to_bytes_be())?;
    ret[..WORD_LEN].copy_from_slice(&x);
    ret[WORD_LEN..].copy_from_slice(&y);

    Ok(())
}

/// generator of the prime-order subgroup, encoded
pub fn generator() -> Result<[u8; POINT_LEN]> {
    encode_point(&EdwardsAffine::generator())
}
