//! # Aggregatable BLS signatures over BN254.
//!
//! BLS signatures ride on a bilinear pairing `e: G1 x G2 -> GT`. A secret
//! scalar `sk` has the public key `pk = sk * G2`; the signature on a message
//! `m` is `sigma = sk * H(m)` with `H` hashing into `G1`. Verification is
//! the single equation `e(H(m), pk) = e(sigma, G2)`, which bilinearity turns
//! into the product check `e(H(m), pk) * e(sigma, G2)^-1 = 1`.
//!
//! ### Aggregation
//!
//! What makes BLS worth the pairing cost is that signatures add: curve-sum
//! any number of signatures and the sum verifies against the sum of the
//! public keys (one message) or against one pairing per distinct message
//! (many messages), in both cases with a single final exponentiation. The
//! [`PairingAccumulator`] exposes exactly that shape (push signed pairs,
//! evaluate the product once) and the three verification modes of
//! [`BLSVerifier`] are thin drivers over it.
//!
//! The distinct-message mode keeps the trivial forgery out because the
//! messages differ, but none of the modes defend against rogue-key attacks
//! by themselves; add a proof-of-possession layer before accepting
//! adversarial signer sets.
//!
//! ### Curve and encodings
//!
//! The scheme is pinned to BN254 (alt-bn128), the curve with precompiled
//! pairing support on the EVM. Public keys live in `G2` (128 bytes),
//! signatures in `G1` (64 bytes); hashing to `G1` uses the pre-standard
//! try-and-increment map over a SHA-256 or Keccak-256 digest, bit-exact
//! with on-chain verifiers using the same mapping. All encodings are
//! uncompressed big-endian; see [`serialize`].
//!
//! ```
//! use bn254_bls::{BLSSigner, BLSVerifier, Keypair, Message, Sha256Hasher};
//!
//! let keypair = Keypair::generate(&mut rand::thread_rng());
//! let public_key = keypair.public;
//! let signer = BLSSigner::new(Sha256Hasher, keypair);
//!
//! let message = Message::new(b"demo-domain", b"hello");
//! let signature = signer.sign(&message).unwrap();
//!
//! let verifier = BLSVerifier::new(Sha256Hasher);
//! assert!(verifier.verify(&message, &signature, &public_key).unwrap());
//! ```

pub mod engine;
pub mod errors;
pub mod hasher;
pub mod serialize;
pub mod single;
pub mod verifiers;

pub use engine::{Gt, PairingAccumulator};
pub use errors::BLSError;
pub use hasher::{Hasher, Keccak256Hasher, Sha256Hasher};
pub use serialize::SerializableToBytes;
pub use single::{
    AggregatedKey, AggregatedSignature, BLSSigner, Keypair, PublicKey, SecretKey, Signature,
};
pub use verifiers::{aggregate_public_keys, aggregate_signatures, BLSVerifier};

/// A message to be signed: free-form payload bytes qualified by a domain
/// separation tag.
///
/// The domain is digested ahead of the payload, so identical payloads under
/// different domains hash to unrelated curve points and signatures cannot
/// cross protocol contexts.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Message {
    pub domain: Vec<u8>,
    pub message: Vec<u8>,
}

impl Message {
    pub fn new(domain: &[u8], message: &[u8]) -> Message {
        Message {
            domain: domain.to_vec(),
            message: message.to_vec(),
        }
    }
}

impl<'a> From<&'a [u8]> for Message {
    /// Wraps raw bytes with the empty domain.
    fn from(message: &'a [u8]) -> Message {
        Message::new(b"", message)
    }
}
