//! ## Verification of single and aggregate signatures.
//!
//! All three verification modes assert one pairing-product equation through
//! a [`PairingAccumulator`]:
//!
//! * single: `e(H(m), pk) * e(sigma, G2)^-1 == 1`;
//! * common-message aggregate: the same equation against the sum of the
//!   signers' public keys;
//! * distinct-message aggregate: `e(sigma, G2)^-1 * prod e(H(m_i), pk_i)
//!   == 1`, which costs `n + 1` Miller loops but still a single final
//!   exponentiation.
//!
//! Each call drives a fresh accumulator, so a verifier is cheap to share
//! and verifications never contaminate one another.
//!
//! The distinct-message form resists the trivial copy-forgery because the
//! messages differ, but it is not rogue-key secure on its own; deployments
//! with adversarial signer sets should layer a proof of possession on top.

use ark_bn254::{G1Projective, G2Projective};
use ark_ec::Group;
use ark_ff::Zero;

use crate::engine::PairingAccumulator;
use crate::errors::BLSError;
use crate::hasher::Hasher;
use crate::single::{AggregatedKey, AggregatedSignature, PublicKey, Signature};
use crate::Message;

/// Folds public keys into one by curve addition. Empty input yields the
/// `G2` identity.
pub fn aggregate_public_keys(keys: &[PublicKey]) -> AggregatedKey {
    PublicKey(keys.iter().fold(G2Projective::zero(), |acc, key| acc + key.0))
}

/// Folds signatures into one by curve addition. Empty input yields the
/// `G1` identity.
pub fn aggregate_signatures(signatures: &[Signature]) -> AggregatedSignature {
    Signature(
        signatures
            .iter()
            .fold(G1Projective::zero(), |acc, signature| acc + signature.0),
    )
}

/// Verifies signatures under a fixed hash variant.
pub struct BLSVerifier<H: Hasher> {
    hasher: H,
}

impl<H: Hasher> BLSVerifier<H> {
    pub fn new(hasher: H) -> Self {
        BLSVerifier { hasher }
    }

    /// Verifies a single signature: `sigma == sk * H(m)`.
    pub fn verify(
        &self,
        message: &Message,
        signature: &Signature,
        public_key: &PublicKey,
    ) -> Result<bool, BLSError> {
        let hashed = self.hasher.hash(message)?;
        let mut pairing = PairingAccumulator::new();
        pairing
            .add_pair(&hashed, &public_key.0)
            .add_pair_inv(&signature.0, &G2Projective::generator());
        Ok(pairing.check())
    }

    /// Verifies an aggregate of signatures over one common message.
    pub fn verify_aggregate_common(
        &self,
        message: &Message,
        public_keys: &[PublicKey],
        signature: &AggregatedSignature,
    ) -> Result<bool, BLSError> {
        if public_keys.is_empty() {
            return Err(BLSError::EmptyKeySet);
        }
        let hashed = self.hasher.hash(message)?;
        let aggregated = aggregate_public_keys(public_keys);
        let mut pairing = PairingAccumulator::new();
        pairing
            .add_pair(&hashed, &aggregated.0)
            .add_pair_inv(&signature.0, &G2Projective::generator());
        Ok(pairing.check())
    }

    /// Verifies an aggregate where every signer signed its own message.
    pub fn verify_aggregate(
        &self,
        messages: &[Message],
        public_keys: &[PublicKey],
        signature: &AggregatedSignature,
    ) -> Result<bool, BLSError> {
        if public_keys.is_empty() {
            return Err(BLSError::EmptyKeySet);
        }
        if messages.len() != public_keys.len() {
            return Err(BLSError::LengthMismatch {
                messages: messages.len(),
                keys: public_keys.len(),
            });
        }
        let mut pairing = PairingAccumulator::new();
        pairing.add_pair_inv(&signature.0, &G2Projective::generator());
        for (message, public_key) in messages.iter().zip(public_keys) {
            let hashed = self.hasher.hash(message)?;
            pairing.add_pair(&hashed, &public_key.0);
        }
        Ok(pairing.check())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::{Keccak256Hasher, Sha256Hasher};
    use crate::serialize::SerializableToBytes;
    use crate::single::{BLSSigner, Keypair};
    use rand::{thread_rng, Rng};

    fn signed_batch(
        count: usize,
        message: impl Fn(usize) -> Message,
    ) -> (Vec<Message>, Vec<PublicKey>, Vec<Signature>) {
        let mut rng = thread_rng();
        let mut messages = Vec::with_capacity(count);
        let mut public_keys = Vec::with_capacity(count);
        let mut signatures = Vec::with_capacity(count);
        for i in 0..count {
            let message = message(i);
            let signer = BLSSigner::new(Sha256Hasher, Keypair::generate(&mut rng));
            public_keys.push(*signer.public());
            signatures.push(signer.sign(&message).unwrap());
            messages.push(message);
        }
        (messages, public_keys, signatures)
    }

    #[test]
    fn verify_single() {
        let mut rng = thread_rng();
        let message = Message::new(&[0x00, 0x00, 0x00, 0x00], &[0x10, 0x11, 0x12, 0x13]);
        let keypair = Keypair::from_secret(&{
            let mut secret = [0u8; 32];
            secret[31] = 0x6f;
            secret
        })
        .unwrap();
        let public_key = keypair.public;
        let signer = BLSSigner::new(Sha256Hasher, keypair);
        let signature = signer.sign(&message).unwrap();

        let verifier = BLSVerifier::new(Sha256Hasher);
        assert!(verifier.verify(&message, &signature, &public_key).unwrap());

        // A different domain over the same payload must not verify.
        let broken = Message::new(&[0x00, 0x00, 0x00, 0x01], &[0x10, 0x11, 0x12, 0x13]);
        assert!(!verifier.verify(&broken, &signature, &public_key).unwrap());

        // Nor a different payload.
        let broken = Message::new(&[0x00, 0x00, 0x00, 0x00], &[0x10, 0x11, 0x12, 0x14]);
        assert!(!verifier.verify(&broken, &signature, &public_key).unwrap());

        // Nor an unrelated key.
        let unrelated = Keypair::generate(&mut rng).public;
        assert!(!verifier.verify(&message, &signature, &unrelated).unwrap());
    }

    #[test]
    fn verify_with_keccak_hasher() {
        let mut rng = thread_rng();
        let message = Message::new(&[0x00; 4], b"keccak domain");
        let keypair = Keypair::generate(&mut rng);
        let public_key = keypair.public;
        let signer = BLSSigner::new(Keccak256Hasher, keypair);
        let signature = signer.sign(&message).unwrap();

        assert!(BLSVerifier::new(Keccak256Hasher)
            .verify(&message, &signature, &public_key)
            .unwrap());
        // The digest variants are not interchangeable.
        assert!(!BLSVerifier::new(Sha256Hasher)
            .verify(&message, &signature, &public_key)
            .unwrap());
    }

    #[test]
    fn verify_aggregate_common_message() {
        let mut rng = thread_rng();
        let message = Message::new(&[0x00; 4], &[0x10, 0x11, 0x12, 0x13]);
        let (_, mut public_keys, signatures) = signed_batch(100, |_| message.clone());
        let aggregated = aggregate_signatures(&signatures);

        let verifier = BLSVerifier::new(Sha256Hasher);
        assert!(verifier
            .verify_aggregate_common(&message, &public_keys, &aggregated)
            .unwrap());

        // Swapping in an unrelated key breaks the aggregate.
        let last = public_keys.len() - 1;
        public_keys[last] = Keypair::generate(&mut rng).public;
        assert!(!verifier
            .verify_aggregate_common(&message, &public_keys, &aggregated)
            .unwrap());
    }

    #[test]
    fn verify_aggregate_distinct_messages() {
        let domain = [0x00, 0x00, 0x00, 0x00];
        let (messages, public_keys, signatures) = signed_batch(50, |_| {
            Message::new(&domain, &thread_rng().gen::<[u8; 4]>())
        });
        let aggregated = aggregate_signatures(&signatures);

        let verifier = BLSVerifier::new(Sha256Hasher);
        assert!(verifier
            .verify_aggregate(&messages, &public_keys, &aggregated)
            .unwrap());
    }

    #[test]
    fn aggregate_rejects_degenerate_inputs() {
        let message = Message::new(&[0x00; 4], &[0x01]);
        let signature = Signature(G1Projective::zero());
        let verifier = BLSVerifier::new(Sha256Hasher);

        assert_eq!(
            verifier.verify_aggregate_common(&message, &[], &signature),
            Err(BLSError::EmptyKeySet)
        );
        assert_eq!(
            verifier.verify_aggregate(&[], &[], &signature),
            Err(BLSError::EmptyKeySet)
        );

        let (messages, public_keys, _) = signed_batch(2, |i| {
            Message::new(&[0x00; 4], &[i as u8])
        });
        assert_eq!(
            verifier.verify_aggregate(&messages[..1], &public_keys, &signature),
            Err(BLSError::LengthMismatch { messages: 1, keys: 2 })
        );
    }

    #[test]
    fn aggregation_is_order_independent() {
        let message = Message::new(&[0x00; 4], b"permute me");
        let (_, public_keys, signatures) = signed_batch(8, |_| message.clone());

        let mut reversed_keys = public_keys.clone();
        reversed_keys.reverse();
        assert_eq!(
            aggregate_public_keys(&public_keys).to_bytes(),
            aggregate_public_keys(&reversed_keys).to_bytes()
        );

        let mut reversed_signatures = signatures.clone();
        reversed_signatures.reverse();
        assert_eq!(
            aggregate_signatures(&signatures).to_bytes(),
            aggregate_signatures(&reversed_signatures).to_bytes()
        );
    }

    #[test]
    fn aggregate_of_nothing_is_the_identity() {
        assert!(aggregate_public_keys(&[]).0.is_zero());
        assert!(aggregate_signatures(&[]).0.is_zero());
    }
}
