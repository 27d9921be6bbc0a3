//! ## Hashing messages to the signature curve.
//!
//! Messages are mapped to `G1` by digesting `domain || message` and feeding
//! the 32-byte digest to a try-and-increment map: interpret the digest as an
//! `Fp` element, then probe consecutive `x` values until `x^3 + 3` is a
//! square. Each probe succeeds with probability about one half, so the loop
//! terminates after a couple of iterations in practice. BN254's `G1` has
//! cofactor one, so the resulting point needs no cofactor clearing.
//!
//! The map predates the hash-to-curve standards and is kept bit-exact so
//! that signatures remain compatible with verifiers using the same mapping.
//! It is not constant time; do not hash secrets with it.

use ark_bn254::{Fq, G1Affine, G1Projective};
use ark_ff::{Field, MontFp, One, PrimeField};
use digest::Digest;
use sha2::Sha256;
use sha3::Keccak256;

use crate::errors::BLSError;
use crate::Message;

// G1 curve equation is y^2 = x^3 + 3.
const COEFF_B: Fq = MontFp!("3");

/// Deterministic map from a message to a point on `G1`.
pub trait Hasher {
    fn hash(&self, message: &Message) -> Result<G1Projective, BLSError>;
}

/// Try-and-increment hashing with a SHA-256 digest.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Hasher;

impl Hasher for Sha256Hasher {
    fn hash(&self, message: &Message) -> Result<G1Projective, BLSError> {
        Ok(hash_to_curve::<Sha256>(message))
    }
}

/// Try-and-increment hashing with a Keccak-256 digest, the variant used by
/// EVM-side verifiers.
#[derive(Clone, Copy, Debug, Default)]
pub struct Keccak256Hasher;

impl Hasher for Keccak256Hasher {
    fn hash(&self, message: &Message) -> Result<G1Projective, BLSError> {
        Ok(hash_to_curve::<Keccak256>(message))
    }
}

/// Digests `domain || message` with `H` and maps the result to `G1`.
pub fn hash_to_curve<H: Digest>(message: &Message) -> G1Projective {
    let digest = H::new()
        .chain_update(&message.domain)
        .chain_update(&message.message)
        .finalize();
    map_to_curve_try_and_increment(&digest)
}

/// Maps a digest to `G1` by try-and-increment.
///
/// The digest is reduced into `Fp` and used as a candidate `x` coordinate;
/// candidates are probed in increments of one until `x^3 + 3` is a quadratic
/// residue. The smaller of the two roots, compared as integers, is taken as
/// `y` so the map is deterministic.
pub fn map_to_curve_try_and_increment(digest: &[u8]) -> G1Projective {
    let mut x = Fq::from_be_bytes_mod_order(digest);
    loop {
        let y_squared = x * x * x + COEFF_B;
        if !y_squared.legendre().is_qnr() {
            let y = y_squared.sqrt().expect("quadratic residue has a root");
            let y_neg = -y;
            let y = if y.into_bigint() <= y_neg.into_bigint() {
                y
            } else {
                y_neg
            };
            return G1Affine::new(x, y).into();
        }
        x += Fq::one();
    }
}
