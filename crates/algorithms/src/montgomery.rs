//! Conversion in and out of the Montgomery domain
//!
//! The engines never track which domain a value lives in. These helpers are
//! the only place that does the scaling, through whichever backend the caller
//! hands in.

use evm384_api::{FieldElement, ModArith384};

use crate::modulus::Modulus;

/// `a * 2^384 mod p`
#[inline]
pub fn to_montgomery<E: ModArith384>(engine: &E, a: &FieldElement, m: &Modulus) -> FieldElement {
    engine.mul_mont(a, m.r2(), m.p(), m.n0())
}

/// `a * 2^-384 mod p`
#[inline]
pub fn from_montgomery<E: ModArith384>(engine: &E, a: &FieldElement, m: &Modulus) -> FieldElement {
    engine.mul_mont(a, &FieldElement::ONE, m.p(), m.n0())
}

/// Ordinary modular product `a * b mod p` through the Montgomery domain
pub fn mul_mod<E: ModArith384>(
    engine: &E,
    a: &FieldElement,
    b: &FieldElement,
    m: &Modulus,
) -> FieldElement {
    // (a*R) * b * R^-1 = a*b
    let am = to_montgomery(engine, a, m);
    engine.mul_mont(&am, b, m.p(), m.n0())
}
