//! ## Keys, signatures and the signer.
//!
//! A secret key is a scalar below the subgroup order; its public key is the
//! matching multiple of the `G2` generator. Signatures live in `G1`, the
//! cheap-to-hash side of the pairing: a signature on `m` is `sk * H(m)`,
//! deterministic for a given key and message.
//!
//! Aggregates of keys and signatures share the shape, encoding and
//! arithmetic of their single-signer forms, so [`AggregatedKey`] and
//! [`AggregatedSignature`] are transparent aliases rather than distinct
//! types.
//!
//! Secrets are zeroised on drop and kept out of `Debug` output.

use core::fmt;

use ark_bn254::{Fr, G1Projective, G2Projective};
use ark_ec::Group;
use ark_ff::{UniformRand, Zero};
use rand::Rng;
use zeroize::Zeroize;

use crate::errors::BLSError;
use crate::hasher::Hasher;
use crate::serialize::{
    expect_length, g1_from_bytes, g1_to_bytes, g2_from_bytes, g2_to_bytes, scalar_from_bytes,
    scalar_to_bytes, SerializableToBytes, G1_SERIALIZED_SIZE, G2_SERIALIZED_SIZE,
    KEYPAIR_SERIALIZED_SIZE, SCALAR_SERIALIZED_SIZE,
};
use crate::Message;

/// Secret signing scalar.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SecretKey(pub(crate) Fr);

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<secret scalar>)")
    }
}

impl SerializableToBytes for SecretKey {
    const SERIALIZED_BYTES_SIZE: usize = SCALAR_SERIALIZED_SIZE;

    /// Zero-padded 32-byte big-endian scalar.
    fn to_bytes(&self) -> Vec<u8> {
        scalar_to_bytes(&self.0).to_vec()
    }

    /// Reduces the 32-byte blob modulo the subgroup order.
    fn from_bytes(bytes: &[u8]) -> Result<Self, BLSError> {
        Ok(SecretKey(scalar_from_bytes(bytes)?))
    }
}

/// Public key: a point on `G2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey(pub G2Projective);

/// Sum of public keys; same shape and encoding as [`PublicKey`].
pub type AggregatedKey = PublicKey;

impl SerializableToBytes for PublicKey {
    const SERIALIZED_BYTES_SIZE: usize = G2_SERIALIZED_SIZE;

    fn to_bytes(&self) -> Vec<u8> {
        g2_to_bytes(&self.0).to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, BLSError> {
        Ok(PublicKey(g2_from_bytes(bytes)?))
    }
}

/// Signature: a point on `G1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature(pub G1Projective);

/// Sum of signatures; same shape and encoding as [`Signature`].
pub type AggregatedSignature = Signature;

impl SerializableToBytes for Signature {
    const SERIALIZED_BYTES_SIZE: usize = G1_SERIALIZED_SIZE;

    fn to_bytes(&self) -> Vec<u8> {
        g1_to_bytes(&self.0).to_vec()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, BLSError> {
        Ok(Signature(g1_from_bytes(bytes)?))
    }
}

/// A secret key together with its derived public key.
#[derive(Clone, Debug)]
pub struct Keypair {
    pub secret: SecretKey,
    pub public: PublicKey,
}

impl Keypair {
    /// Draws a uniform nonzero scalar and derives the public key.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut scalar = Fr::rand(rng);
        while scalar.is_zero() {
            scalar = Fr::rand(rng);
        }
        Self::from_scalar(scalar)
    }

    /// Builds a keypair from a 32-byte secret, reduced modulo the subgroup
    /// order.
    pub fn from_secret(bytes: &[u8]) -> Result<Self, BLSError> {
        Ok(Self::from_scalar(scalar_from_bytes(bytes)?))
    }

    fn from_scalar(scalar: Fr) -> Self {
        let public = PublicKey(G2Projective::generator() * scalar);
        Keypair {
            secret: SecretKey(scalar),
            public,
        }
    }
}

impl SerializableToBytes for Keypair {
    const SERIALIZED_BYTES_SIZE: usize = KEYPAIR_SERIALIZED_SIZE;

    fn to_bytes(&self) -> Vec<u8> {
        let mut out = self.public.to_bytes();
        out.extend_from_slice(&self.secret.to_bytes());
        out
    }

    /// Splits the blob into public key and secret scalar.
    ///
    /// The public key is validated as a curve point but is trusted to match
    /// the secret; the pairing is not re-derived.
    fn from_bytes(bytes: &[u8]) -> Result<Self, BLSError> {
        expect_length(bytes, Self::SERIALIZED_BYTES_SIZE)?;
        let public = PublicKey::from_bytes(&bytes[..G2_SERIALIZED_SIZE])?;
        let secret = SecretKey::from_bytes(&bytes[G2_SERIALIZED_SIZE..])?;
        Ok(Keypair { secret, public })
    }
}

/// Signs messages under a fixed keypair and hash variant.
pub struct BLSSigner<H: Hasher> {
    hasher: H,
    keypair: Keypair,
}

impl<H: Hasher> BLSSigner<H> {
    pub fn new(hasher: H, keypair: Keypair) -> Self {
        BLSSigner { hasher, keypair }
    }

    pub fn public(&self) -> &PublicKey {
        &self.keypair.public
    }

    /// Computes `sk * H(domain, message)`.
    pub fn sign(&self, message: &Message) -> Result<Signature, BLSError> {
        let hashed = self.hasher.hash(message)?;
        Ok(Signature(hashed * self.keypair.secret.0))
    }
}
