//! Straight-line engine using native carry chains
//!
//! Every limb position is spelled out. Additions and subtractions run on the
//! `adc`/`sbb` instructions on x86_64 (see `evm384_internal::arch`);
//! multiplication forms the full 768-bit product and then performs six
//! separated Montgomery reduction rounds.

use evm384_api::{FieldElement, ModArith384};
use evm384_internal::arch::{addcarry_u64, subborrow_u64};
use evm384_internal::arith::{adc, mac};
use evm384_internal::constant_time::ct_mask;

/// Fully unrolled engine; the "asm" side of every comparison
#[derive(Copy, Clone, Debug, Default)]
pub struct Unrolled;

impl ModArith384 for Unrolled {
    fn name(&self) -> &'static str {
        "unrolled"
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

/// Performs modular reduction of `hi * 2^384 + t` by one subtraction of p
#[inline(always)]
fn subtract_p(t: [u64; 6], hi: u8, p: &FieldElement) -> FieldElement {
    let (r0, bb) = subborrow_u64(t[0], p.0[0], 0);
    let (r1, bb) = subborrow_u64(t[1], p.0[1], bb);
    let (r2, bb) = subborrow_u64(t[2], p.0[2], bb);
    let (r3, bb) = subborrow_u64(t[3], p.0[3], bb);
    let (r4, bb) = subborrow_u64(t[4], p.0[4], bb);
    let (r5, bb) = subborrow_u64(t[5], p.0[5], bb);

    // All-ones when t < p and nothing carried out above it
    let keep = (hi as u64).wrapping_sub(bb as u64);

    FieldElement([
        (t[0] & keep) | (r0 & !keep),
        (t[1] & keep) | (r1 & !keep),
        (t[2] & keep) | (r2 & !keep),
        (t[3] & keep) | (r3 & !keep),
        (t[4] & keep) | (r4 & !keep),
        (t[5] & keep) | (r5 & !keep),
    ])
}

/// `a + b mod p` for `a, b < p`
#[inline]
pub fn add_mod(a: &FieldElement, b: &FieldElement, p: &FieldElement) -> FieldElement {
    let (d0, cc) = addcarry_u64(a.0[0], b.0[0], 0);
    let (d1, cc) = addcarry_u64(a.0[1], b.0[1], cc);
    let (d2, cc) = addcarry_u64(a.0[2], b.0[2], cc);
    let (d3, cc) = addcarry_u64(a.0[3], b.0[3], cc);
    let (d4, cc) = addcarry_u64(a.0[4], b.0[4], cc);
    let (d5, cc) = addcarry_u64(a.0[5], b.0[5], cc);

    subtract_p([d0, d1, d2, d3, d4, d5], cc, p)
}

/// `a - b mod p` for `a, b < p`
#[inline]
pub fn sub_mod(a: &FieldElement, b: &FieldElement, p: &FieldElement) -> FieldElement {
    let (d0, bb) = subborrow_u64(a.0[0], b.0[0], 0);
    let (d1, bb) = subborrow_u64(a.0[1], b.0[1], bb);
    let (d2, bb) = subborrow_u64(a.0[2], b.0[2], bb);
    let (d3, bb) = subborrow_u64(a.0[3], b.0[3], bb);
    let (d4, bb) = subborrow_u64(a.0[4], b.0[4], bb);
    let (d5, bb) = subborrow_u64(a.0[5], b.0[5], bb);

    let m = ct_mask(bb as u64);
    let (d0, cc) = addcarry_u64(d0, p.0[0] & m, 0);
    let (d1, cc) = addcarry_u64(d1, p.0[1] & m, cc);
    let (d2, cc) = addcarry_u64(d2, p.0[2] & m, cc);
    let (d3, cc) = addcarry_u64(d3, p.0[3] & m, cc);
    let (d4, cc) = addcarry_u64(d4, p.0[4] & m, cc);
    let (d5, _) = addcarry_u64(d5, p.0[5] & m, cc);

    FieldElement([d0, d1, d2, d3, d4, d5])
}

/// Schoolbook 6x6 limb product
#[inline(always)]
fn product(a: &[u64; 6], b: &[u64; 6]) -> [u64; 12] {
    let (w0, c) = mac(0, a[0], b[0], 0);
    let (w1, c) = mac(0, a[0], b[1], c);
    let (w2, c) = mac(0, a[0], b[2], c);
    let (w3, c) = mac(0, a[0], b[3], c);
    let (w4, c) = mac(0, a[0], b[4], c);
    let (w5, w6) = mac(0, a[0], b[5], c);

    let (w1, c) = mac(w1, a[1], b[0], 0);
    let (w2, c) = mac(w2, a[1], b[1], c);
    let (w3, c) = mac(w3, a[1], b[2], c);
    let (w4, c) = mac(w4, a[1], b[3], c);
    let (w5, c) = mac(w5, a[1], b[4], c);
    let (w6, w7) = mac(w6, a[1], b[5], c);

    let (w2, c) = mac(w2, a[2], b[0], 0);
    let (w3, c) = mac(w3, a[2], b[1], c);
    let (w4, c) = mac(w4, a[2], b[2], c);
    let (w5, c) = mac(w5, a[2], b[3], c);
    let (w6, c) = mac(w6, a[2], b[4], c);
    let (w7, w8) = mac(w7, a[2], b[5], c);

    let (w3, c) = mac(w3, a[3], b[0], 0);
    let (w4, c) = mac(w4, a[3], b[1], c);
    let (w5, c) = mac(w5, a[3], b[2], c);
    let (w6, c) = mac(w6, a[3], b[3], c);
    let (w7, c) = mac(w7, a[3], b[4], c);
    let (w8, w9) = mac(w8, a[3], b[5], c);

    let (w4, c) = mac(w4, a[4], b[0], 0);
    let (w5, c) = mac(w5, a[4], b[1], c);
    let (w6, c) = mac(w6, a[4], b[2], c);
    let (w7, c) = mac(w7, a[4], b[3], c);
    let (w8, c) = mac(w8, a[4], b[4], c);
    let (w9, w10) = mac(w9, a[4], b[5], c);

    let (w5, c) = mac(w5, a[5], b[0], 0);
    let (w6, c) = mac(w6, a[5], b[1], c);
    let (w7, c) = mac(w7, a[5], b[2], c);
    let (w8, c) = mac(w8, a[5], b[3], c);
    let (w9, c) = mac(w9, a[5], b[4], c);
    let (w10, w11) = mac(w10, a[5], b[5], c);

    [w0, w1, w2, w3, w4, w5, w6, w7, w8, w9, w10, w11]
}

/// `a * b * 2^-384 mod p`
#[inline]
pub fn mul_mont(a: &FieldElement, b: &FieldElement, p: &FieldElement, n0: u64) -> FieldElement {
    let w = product(&a.0, &b.0);
    let m = &p.0;

    // Each round clears the lowest live limb; `s*` is the carry parked above
    // the window for the next round to fold in.

    // Round 1
    let k = w[0].wrapping_mul(n0);
    let (_, c) = mac(w[0], k, m[0], 0);
    let (r1, c) = mac(w[1], k, m[1], c);
    let (r2, c) = mac(w[2], k, m[2], c);
    let (r3, c) = mac(w[3], k, m[3], c);
    let (r4, c) = mac(w[4], k, m[4], c);
    let (r5, c) = mac(w[5], k, m[5], c);
    let (r6, s) = adc(w[6], c, 0);

    // Round 2
    let k = r1.wrapping_mul(n0);
    let (_, c) = mac(r1, k, m[0], 0);
    let (r2, c) = mac(r2, k, m[1], c);
    let (r3, c) = mac(r3, k, m[2], c);
    let (r4, c) = mac(r4, k, m[3], c);
    let (r5, c) = mac(r5, k, m[4], c);
    let (r6, c) = mac(r6, k, m[5], c);
    let (r7, s) = adc(w[7], s, c);

    // Round 3
    let k = r2.wrapping_mul(n0);
    let (_, c) = mac(r2, k, m[0], 0);
    let (r3, c) = mac(r3, k, m[1], c);
    let (r4, c) = mac(r4, k, m[2], c);
    let (r5, c) = mac(r5, k, m[3], c);
    let (r6, c) = mac(r6, k, m[4], c);
    let (r7, c) = mac(r7, k, m[5], c);
    let (r8, s) = adc(w[8], s, c);

    // Round 4
    let k = r3.wrapping_mul(n0);
    let (_, c) = mac(r3, k, m[0], 0);
    let (r4, c) = mac(r4, k, m[1], c);
    let (r5, c) = mac(r5, k, m[2], c);
    let (r6, c) = mac(r6, k, m[3], c);
    let (r7, c) = mac(r7, k, m[4], c);
    let (r8, c) = mac(r8, k, m[5], c);
    let (r9, s) = adc(w[9], s, c);

    // Round 5
    let k = r4.wrapping_mul(n0);
    let (_, c) = mac(r4, k, m[0], 0);
    let (r5, c) = mac(r5, k, m[1], c);
    let (r6, c) = mac(r6, k, m[2], c);
    let (r7, c) = mac(r7, k, m[3], c);
    let (r8, c) = mac(r8, k, m[4], c);
    let (r9, c) = mac(r9, k, m[5], c);
    let (r10, s) = adc(w[10], s, c);

    // Round 6
    let k = r5.wrapping_mul(n0);
    let (_, c) = mac(r5, k, m[0], 0);
    let (r6, c) = mac(r6, k, m[1], c);
    let (r7, c) = mac(r7, k, m[2], c);
    let (r8, c) = mac(r8, k, m[3], c);
    let (r9, c) = mac(r9, k, m[4], c);
    let (r10, c) = mac(r10, k, m[5], c);
    let (r11, hi) = adc(w[11], s, c);

    subtract_p([r6, r7, r8, r9, r10, r11], hi as u8, p)
}
