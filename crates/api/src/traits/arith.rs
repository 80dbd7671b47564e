//! The arithmetic oracle boundary
//!
//! Every implementation of 384-bit modular arithmetic, portable or
//! platform-specific, is driven through this trait so that the benchmark and
//! cross-validation harness can treat them interchangeably.

use crate::types::{FieldElement, Operation};

/// Modular add, subtract and Montgomery multiply over six 64-bit limbs
///
/// The modulus `p` and the Montgomery constant `n0 = -p^-1 mod 2^64` are
/// passed on every call rather than captured, so one backend instance serves
/// any modulus.
///
/// Implementations must be pure: identical inputs always produce identical
/// outputs, and nothing is allocated. Inputs are assumed reduced (`< p`);
/// behavior on unreduced inputs is unspecified but must not panic.
pub trait ModArith384 {
    /// Short human-readable backend name
    fn name(&self) -> &'static str;

    /// `a + b mod p`
    fn add_mod(&self, a: &FieldElement, b: &FieldElement, p: &FieldElement) -> FieldElement;

    /// `a - b mod p`
    fn sub_mod(&self, a: &FieldElement, b: &FieldElement, p: &FieldElement) -> FieldElement;

    /// `a * b * 2^-384 mod p`
    fn mul_mont(
        &self,
        a: &FieldElement,
        b: &FieldElement,
        p: &FieldElement,
        n0: u64,
    ) -> FieldElement;

    /// Dispatch by [`Operation`] tag
    #[inline]
    fn apply(
        &self,
        op: Operation,
        a: &FieldElement,
        b: &FieldElement,
        p: &FieldElement,
        n0: u64,
    ) -> FieldElement {
        match op {
            Operation::Add => self.add_mod(a, b, p),
            Operation::Sub => self.sub_mod(a, b, p),
            Operation::MulMont => self.mul_mont(a, b, p, n0),
        }
    }
}

impl<T: ModArith384 + ?Sized> ModArith384 for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    #[inline]
    fn add_mod(&self, a: &FieldElement, b: &FieldElement, p: &FieldElement) -> FieldElement {
        (**self).add_mod(a, b, p)
    }

    #[inline]
    fn sub_mod(&self, a: &FieldElement, b: &FieldElement, p: &FieldElement) -> FieldElement {
        (**self).sub_mod(a, b, p)
    }

    #[inline]
    fn mul_mont(
        &self,
        a: &FieldElement,
        b: &FieldElement,
        p: &FieldElement,
        n0: u64,
    ) -> FieldElement {
        (**self).mul_mont(a, b, p, n0)
    }
}
