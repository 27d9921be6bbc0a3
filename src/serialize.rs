//! ## Byte encodings for keys, signatures and curve points.
//!
//! All encodings are fixed-width, uncompressed and big-endian:
//!
//! * scalar: 32 bytes;
//! * `G1` point: 64 bytes, `x || y`;
//! * `G2` point: 128 bytes, `x0 || x1 || y0 || y1` with `x = x0 + x1 * u`;
//! * keypair: 160 bytes, public key followed by the secret scalar.
//!
//! The group identity encodes as the all-zero blob and decodes back to the
//! identity. Point coordinates must be canonical (strictly below the base
//! field modulus) and decoded points are checked to lie on the curve and in
//! the r-order subgroup; scalars are instead reduced modulo the subgroup
//! order on the way in.

use ark_bn254::{Fq, Fq2, Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{BigInteger, BigInteger256, PrimeField, Zero};

use crate::errors::BLSError;

/// Serialized size of a scalar.
pub const SCALAR_SERIALIZED_SIZE: usize = 32;
/// Serialized size of a `G1` point, and so of a signature.
pub const G1_SERIALIZED_SIZE: usize = 64;
/// Serialized size of a `G2` point, and so of a public key.
pub const G2_SERIALIZED_SIZE: usize = 128;
/// Serialized size of a keypair.
pub const KEYPAIR_SERIALIZED_SIZE: usize = G2_SERIALIZED_SIZE + SCALAR_SERIALIZED_SIZE;

const FIELD_BYTES: usize = 32;

/// Fixed-width byte serialization shared by the key and signature types.
pub trait SerializableToBytes: Sized {
    const SERIALIZED_BYTES_SIZE: usize;

    fn to_bytes(&self) -> Vec<u8>;

    fn from_bytes(bytes: &[u8]) -> Result<Self, BLSError>;
}

pub(crate) fn expect_length(bytes: &[u8], expected: usize) -> Result<(), BLSError> {
    if bytes.len() != expected {
        return Err(BLSError::InvalidEncoding(format!(
            "expected {expected} bytes, got {}",
            bytes.len()
        )));
    }
    Ok(())
}

fn fq_to_bytes(element: &Fq, out: &mut [u8]) {
    out.copy_from_slice(&element.into_bigint().to_bytes_be());
}

// Canonical decoding: values at or above the modulus are rejected rather
// than reduced, so every field element has exactly one encoding.
fn fq_from_bytes(bytes: &[u8]) -> Result<Fq, BLSError> {
    let mut limbs = [0u64; 4];
    for (limb, chunk) in limbs.iter_mut().zip(bytes.rchunks(8)) {
        let mut be = [0u8; 8];
        be.copy_from_slice(chunk);
        *limb = u64::from_be_bytes(be);
    }
    Fq::from_bigint(BigInteger256::new(limbs))
        .ok_or_else(|| BLSError::InvalidEncoding("field element exceeds the modulus".into()))
}

pub(crate) fn scalar_to_bytes(scalar: &Fr) -> [u8; SCALAR_SERIALIZED_SIZE] {
    let mut out = [0u8; SCALAR_SERIALIZED_SIZE];
    out.copy_from_slice(&scalar.into_bigint().to_bytes_be());
    out
}

pub(crate) fn scalar_from_bytes(bytes: &[u8]) -> Result<Fr, BLSError> {
    expect_length(bytes, SCALAR_SERIALIZED_SIZE)?;
    Ok(Fr::from_be_bytes_mod_order(bytes))
}

pub(crate) fn g1_to_bytes(point: &G1Projective) -> [u8; G1_SERIALIZED_SIZE] {
    let mut out = [0u8; G1_SERIALIZED_SIZE];
    if let Some((x, y)) = point.into_affine().xy() {
        fq_to_bytes(x, &mut out[..FIELD_BYTES]);
        fq_to_bytes(y, &mut out[FIELD_BYTES..]);
    }
    out
}

pub(crate) fn g1_from_bytes(bytes: &[u8]) -> Result<G1Projective, BLSError> {
    expect_length(bytes, G1_SERIALIZED_SIZE)?;
    if bytes.iter().all(|byte| *byte == 0) {
        return Ok(G1Projective::zero());
    }
    let x = fq_from_bytes(&bytes[..FIELD_BYTES])?;
    let y = fq_from_bytes(&bytes[FIELD_BYTES..])?;
    let point = G1Affine::new_unchecked(x, y);
    if !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(BLSError::NotOnCurve);
    }
    Ok(point.into())
}

pub(crate) fn g2_to_bytes(point: &G2Projective) -> [u8; G2_SERIALIZED_SIZE] {
    let mut out = [0u8; G2_SERIALIZED_SIZE];
    if let Some((x, y)) = point.into_affine().xy() {
        fq_to_bytes(&x.c0, &mut out[..FIELD_BYTES]);
        fq_to_bytes(&x.c1, &mut out[FIELD_BYTES..2 * FIELD_BYTES]);
        fq_to_bytes(&y.c0, &mut out[2 * FIELD_BYTES..3 * FIELD_BYTES]);
        fq_to_bytes(&y.c1, &mut out[3 * FIELD_BYTES..]);
    }
    out
}

pub(crate) fn g2_from_bytes(bytes: &[u8]) -> Result<G2Projective, BLSError> {
    expect_length(bytes, G2_SERIALIZED_SIZE)?;
    if bytes.iter().all(|byte| *byte == 0) {
        return Ok(G2Projective::zero());
    }
    let x = Fq2::new(
        fq_from_bytes(&bytes[..FIELD_BYTES])?,
        fq_from_bytes(&bytes[FIELD_BYTES..2 * FIELD_BYTES])?,
    );
    let y = Fq2::new(
        fq_from_bytes(&bytes[2 * FIELD_BYTES..3 * FIELD_BYTES])?,
        fq_from_bytes(&bytes[3 * FIELD_BYTES..])?,
    );
    let point = G2Affine::new_unchecked(x, y);
    if !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(BLSError::NotOnCurve);
    }
    Ok(point.into())
}
