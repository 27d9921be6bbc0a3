//! ## Product-pairing engine.
//!
//! Every BLS verification in this crate reduces to asserting that a product
//! of pairings equals the identity of `GT`. The [`PairingAccumulator`]
//! surfaces that computation directly: callers push `(G1, G2)` pairs with a
//! sign, and the engine evaluates the whole product with one Miller loop per
//! pair followed by a single shared final exponentiation. Sharing the final
//! exponentiation is what makes distinct-message aggregate verification
//! cheap; it is by far the most expensive step and is paid once regardless
//! of the number of pairs.
//!
//! The accumulator is a mutable builder owned by one caller. `result` and
//! `check` read the pending pairs without clearing them, so a subsequent
//! `add_pair` keeps extending the same product; call [`reset`] before
//! reusing the value for an unrelated computation.
//!
//! [`reset`]: PairingAccumulator::reset

use ark_bn254::{Bn254, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ec::CurveGroup;
use ark_ff::{One, Zero};

/// Target-group element produced by the pairing.
pub type Gt = PairingOutput<Bn254>;

/// Accumulates signed `(G1, G2)` pairs and evaluates their product pairing.
#[derive(Clone, Debug, Default)]
pub struct PairingAccumulator {
    pairs: Vec<(G1Affine, G2Affine)>,
}

impl PairingAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all pending pairs.
    pub fn reset(&mut self) -> &mut Self {
        self.pairs.clear();
        self
    }

    /// Pushes `e(a, b)` onto the pending product.
    ///
    /// A pair with an identity operand contributes the identity of `GT` and
    /// is skipped; feeding such a pair to the Miller loop instead would
    /// zero out the whole product in `Fp12`.
    pub fn add_pair(&mut self, a: &G1Projective, b: &G2Projective) -> &mut Self {
        if !a.is_zero() && !b.is_zero() {
            self.pairs.push((a.into_affine(), b.into_affine()));
        }
        self
    }

    /// Pushes `e(a, b)^-1` onto the pending product, as `e(-a, b)`.
    pub fn add_pair_inv(&mut self, a: &G1Projective, b: &G2Projective) -> &mut Self {
        self.add_pair(&(-*a), b)
    }

    /// Evaluates the product of all pending pairings.
    ///
    /// Runs one multi-Miller loop over the pending pairs and a single final
    /// exponentiation. The empty product is the identity of `GT`.
    pub fn result(&self) -> Gt {
        if self.pairs.is_empty() {
            return Gt::zero();
        }
        let loop_output = Bn254::multi_miller_loop(
            self.pairs.iter().map(|(a, _)| *a),
            self.pairs.iter().map(|(_, b)| *b),
        );
        Bn254::final_exponentiation(loop_output)
            .expect("Miller loop over nonzero operands yields a unit")
    }

    /// Whether the pending product evaluates to the identity of `GT`.
    pub fn check(&self) -> bool {
        self.result().0.is_one()
    }
}
