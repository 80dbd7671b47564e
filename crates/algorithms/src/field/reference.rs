//! Portable reference engine
//!
//! Loop-based and deliberately plain: every limb step goes through the
//! widening helpers in `evm384_internal::arith`, and every conditional
//! correction is a mask select. The loops have fixed trip counts, so control
//! flow never depends on operand values.

use evm384_api::{FieldElement, ModArith384, LIMBS};
use evm384_internal::arith::{adc, mac, sbb};
use evm384_internal::constant_time::{ct_mask, ct_select_limbs};

/// Loop-based engine; the "no asm" side of every comparison
#[derive(Copy, Clone, Debug, Default)]
pub struct Reference;

impl ModArith384 for Reference {
    fn name(&self) -> &'static str {
        "reference"
    }

    #[inline]
    fn add_mod(&self, a: &FieldElement, b: &FieldElement, p: &FieldElement) -> FieldElement {
        add_mod(a, b, p)
    }

    #[inline]
    fn sub_mod(&self, a: &FieldElement, b: &FieldElement, p: &FieldElement) -> FieldElement {
        sub_mod(a, b, p)
    }

    #[inline]
    fn mul_mont(
        &self,
        a: &FieldElement,
        b: &FieldElement,
        p: &FieldElement,
        n0: u64,
    ) -> FieldElement {
        mul_mont(a, b, p, n0)
    }
}

/// Subtract `p` from `carry * 2^384 + tmp` if the result stays non-negative
///
/// `mask = carry - borrow` is all-ones exactly when the subtraction
/// underflowed without an incoming carry to absorb it, i.e. when `tmp`
/// was already below `p`.
#[inline(always)]
pub(crate) fn reduce_once(tmp: &[u64; LIMBS], carry: u64, p: &FieldElement) -> FieldElement {
    let mut reduced = [0u64; LIMBS];
    let mut borrow = 0u64;
    for i in 0..LIMBS {
        (reduced[i], borrow) = sbb(tmp[i], p.0[i], borrow);
    }

    let mask = carry.wrapping_sub(borrow);
    FieldElement(ct_select_limbs(mask, tmp, &reduced))
}

/// `a + b mod p` for `a, b < p`
pub fn add_mod(a: &FieldElement, b: &FieldElement, p: &FieldElement) -> FieldElement {
    let mut tmp = [0u64; LIMBS];
    let mut carry = 0u64;
    for i in 0..LIMBS {
        (tmp[i], carry) = adc(a.0[i], b.0[i], carry);
    }

    reduce_once(&tmp, carry, p)
}

/// `a - b mod p` for `a, b < p`
pub fn sub_mod(a: &FieldElement, b: &FieldElement, p: &FieldElement) -> FieldElement {
    let mut diff = [0u64; LIMBS];
    let mut borrow = 0u64;
    for i in 0..LIMBS {
        (diff[i], borrow) = sbb(a.0[i], b.0[i], borrow);
    }

    // Add p back when the subtraction wrapped
    let mask = ct_mask(borrow);
    let mut out = [0u64; LIMBS];
    let mut carry = 0u64;
    for i in 0..LIMBS {
        (out[i], carry) = adc(diff[i], p.0[i] & mask, carry);
    }

    FieldElement(out)
}

/// `a * b * 2^-384 mod p` by coarsely integrated operand scanning
///
/// The accumulator holds `LIMBS + 1` words; `hi` is the single bit that can
/// spill above it between the multiply and reduce halves of a round.
pub fn mul_mont(a: &FieldElement, b: &FieldElement, p: &FieldElement, n0: u64) -> FieldElement {
    let mut acc = [0u64; LIMBS + 1];

    for j in 0..LIMBS {
        // acc += a * b[j]
        let mut carry = 0u64;
        for i in 0..LIMBS {
            (acc[i], carry) = mac(acc[i], a.0[i], b.0[j], carry);
        }
        let (top, hi) = adc(acc[LIMBS], carry, 0);
        acc[LIMBS] = top;

        // acc += mx * p, which clears acc[0]
        let mx = n0.wrapping_mul(acc[0]);
        let (_, mut carry) = mac(acc[0], mx, p.0[0], 0);
        for i in 1..LIMBS {
            // Shift down by one limb as we go
            (acc[i - 1], carry) = mac(acc[i], mx, p.0[i], carry);
        }
        let (top, c) = adc(acc[LIMBS], carry, 0);
        acc[LIMBS - 1] = top;
        acc[LIMBS] = hi + c;
    }

    let mut tmp = [0u64; LIMBS];
    tmp.copy_from_slice(&acc[..LIMBS]);
    reduce_once(&tmp, acc[LIMBS], p)
}
