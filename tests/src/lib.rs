//! Shared helpers for the evm384 integration tests
//!
//! `num-bigint` serves as the arbitrary-precision reference every engine is
//! checked against.

use evm384_algorithms::{FieldElement, Modulus, LIMBS};
use num_bigint::BigUint;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

pub fn to_biguint(fe: &FieldElement) -> BigUint {
    let mut bytes = [0u8; LIMBS * 8];
    for (i, limb) in fe.0.iter().enumerate() {
        bytes[i * 8..i * 8 + 8].copy_from_slice(&limb.to_le_bytes());
    }
    BigUint::from_bytes_le(&bytes)
}

/// Panics if `x` needs more than 384 bits
pub fn from_biguint(x: &BigUint) -> FieldElement {
    let mut bytes = x.to_bytes_le();
    assert!(bytes.len() <= LIMBS * 8, "value exceeds 384 bits");
    bytes.resize(LIMBS * 8, 0);
    let mut limbs = [0u64; LIMBS];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let mut chunk = [0u8; 8];
        chunk.copy_from_slice(&bytes[i * 8..i * 8 + 8]);
        *limb = u64::from_le_bytes(chunk);
    }
    FieldElement(limbs)
}

/// 2^384
pub fn two_pow_384() -> BigUint {
    BigUint::from(1u64) << 384
}

/// `(2^384)^-1 mod p`
pub fn r_inverse(m: &Modulus) -> BigUint {
    let p = to_biguint(m.p());
    let r = two_pow_384() % &p;
    // p is prime: r^(p-2)
    r.modpow(&(&p - BigUint::from(2u64)), &p)
}

/// `2^384 - 317`: odd, every limb saturated, so `2p` overflows 384 bits
pub fn full_width_modulus() -> Modulus {
    let mut limbs = [u64::MAX; LIMBS];
    limbs[0] = u64::MAX - 316;
    Modulus::new("full-width", FieldElement(limbs)).expect("2^384 - 317 is a valid modulus")
}

/// Whether `r` is the reduced Montgomery product `a * b / 2^384 mod p`
///
/// Checks `r * 2^384 == a * b (mod p)`, which needs no inverse and so no
/// primality of p.
pub fn is_montgomery_product(m: &Modulus, a: &FieldElement, b: &FieldElement, r: &FieldElement) -> bool {
    let p = to_biguint(m.p());
    let r = to_biguint(r);
    r < p && (r * two_pow_384()) % &p == (to_biguint(a) * to_biguint(b)) % &p
}

/// Reduce an arbitrary 384-bit value modulo p
pub fn reduce(x: &FieldElement, m: &Modulus) -> FieldElement {
    from_biguint(&(to_biguint(x) % to_biguint(m.p())))
}

/// A uniformly random value below p
pub fn random_below(rng: &mut impl Rng, m: &Modulus) -> FieldElement {
    let limbs: [u64; LIMBS] = rng.gen();
    reduce(&FieldElement(limbs), m)
}

pub fn rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_biguint_round_trip() {
        let m = Modulus::BLS12_381;
        assert_eq!(from_biguint(&to_biguint(m.p())), *m.p());
        assert_eq!(
            to_biguint(m.r()),
            two_pow_384() % to_biguint(m.p())
        );
        assert_eq!(
            to_biguint(m.r2()),
            (two_pow_384() * two_pow_384()) % to_biguint(m.p())
        );
    }

    #[test]
    fn test_full_width_modulus() {
        let m = full_width_modulus();
        assert_eq!(to_biguint(m.p()), two_pow_384() - BigUint::from(317u32));
        assert!(to_biguint(m.p()) * 2u32 >= two_pow_384());
        assert_eq!(to_biguint(m.r()), BigUint::from(317u32));
        assert_eq!(
            to_biguint(m.r2()),
            (two_pow_384() * two_pow_384()) % to_biguint(m.p())
        );
    }
}
