//! Bindings to the blst 384-bit field routines
//!
//! The symbols are resolved at link time; build scripts or `RUSTFLAGS` must
//! point the linker at a blst static library.

#![allow(unsafe_code)]

use evm384_api::{FieldElement, ModArith384, LIMBS};

extern "C" {
    fn add_mod_384(ret: *mut u64, a: *const u64, b: *const u64, p: *const u64);
    fn sub_mod_384(ret: *mut u64, a: *const u64, b: *const u64, p: *const u64);
    fn mul_mont_384(ret: *mut u64, a: *const u64, b: *const u64, p: *const u64, n0: u64);
}

/// The externally linked platform-optimized oracle
#[derive(Copy, Clone, Debug, Default)]
pub struct ExternOracle;

impl ModArith384 for ExternOracle {
    fn name(&self) -> &'static str {
        "blst"
    }

    fn add_mod(&self, a: &FieldElement, b: &FieldElement, p: &FieldElement) -> FieldElement {
        let mut ret = [0u64; LIMBS];
        // SAFETY: every pointer refers to a live six-limb array and `ret` is
        // not aliased by any input.
        unsafe { add_mod_384(ret.as_mut_ptr(), a.0.as_ptr(), b.0.as_ptr(), p.0.as_ptr()) };
        FieldElement(ret)
    }

    fn sub_mod(&self, a: &FieldElement, b: &FieldElement, p: &FieldElement) -> FieldElement {
        let mut ret = [0u64; LIMBS];
        // SAFETY: as above
        unsafe { sub_mod_384(ret.as_mut_ptr(), a.0.as_ptr(), b.0.as_ptr(), p.0.as_ptr()) };
        FieldElement(ret)
    }

    fn mul_mont(
        &self,
        a: &FieldElement,
        b: &FieldElement,
        p: &FieldElement,
        n0: u64,
    ) -> FieldElement {
        let mut ret = [0u64; LIMBS];
        // SAFETY: as above
        unsafe {
            mul_mont_384(ret.as_mut_ptr(), a.0.as_ptr(), b.0.as_ptr(), p.0.as_ptr(), n0)
        };
        FieldElement(ret)
    }
}
