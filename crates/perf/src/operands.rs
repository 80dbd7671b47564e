//! Deterministic operand generation
//!
//! Limbs 0 to 4 are uniform over the full 64-bit range; limb 5 is uniform
//! over `[0, p[5]]`. This keeps values at or below the modulus' magnitude
//! without rejection sampling. A value whose top limb equals `p[5]` can
//! still exceed p; the odds are about 2^-64 per draw for the built-in moduli.

use evm384_algorithms::{FieldElement, Modulus, LIMBS};
use rand::distributions::{Distribution, Uniform};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Two operands handed to a binary operation
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OperandPair {
    pub a: FieldElement,
    pub b: FieldElement,
}

pub struct OperandGenerator {
    rng: ChaCha20Rng,
    top: Uniform<u64>,
}

impl OperandGenerator {
    pub fn new(seed: u64, modulus: &Modulus) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            top: Uniform::new_inclusive(0, modulus.top_limb()),
        }
    }

    pub fn next_element(&mut self) -> FieldElement {
        let mut limbs = [0u64; LIMBS];
        for limb in limbs.iter_mut().take(LIMBS - 1) {
            *limb = self.rng.gen();
        }
        limbs[LIMBS - 1] = self.top.sample(&mut self.rng);
        FieldElement(limbs)
    }

    pub fn next_pair(&mut self) -> OperandPair {
        let a = self.next_element();
        let b = self.next_element();
        OperandPair { a, b }
    }
}
