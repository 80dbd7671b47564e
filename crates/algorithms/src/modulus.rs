//! Moduli as first-class values
//!
//! A [`Modulus`] carries the prime together with the constants Montgomery
//! arithmetic derives from it, so that callers pass one value around instead
//! of keeping `p` and `n0` in sync by hand.

use evm384_api::error::validate;
use evm384_api::{FieldElement, Result, LIMBS};
use evm384_params::curves::{bls12_377, bls12_381};
use subtle::Choice;

use crate::field::reference;

/// An odd 384-bit modulus with its Montgomery constants
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Modulus {
    name: &'static str,
    p: FieldElement,
    n0: u64,
    r: FieldElement,
    r2: FieldElement,
}

impl Modulus {
    /// The BLS12-381 base field prime
    pub const BLS12_381: Modulus = Modulus {
        name: bls12_381::NAME,
        p: FieldElement(bls12_381::MODULUS),
        n0: bls12_381::INV,
        r: FieldElement(bls12_381::R),
        r2: FieldElement(bls12_381::R2),
    };

    /// The BLS12-377 base field prime
    pub const BLS12_377: Modulus = Modulus {
        name: bls12_377::NAME,
        p: FieldElement(bls12_377::MODULUS),
        n0: bls12_377::INV,
        r: FieldElement(bls12_377::R),
        r2: FieldElement(bls12_377::R2),
    };

    /// Every built-in modulus
    pub const ALL: [Modulus; 2] = [Modulus::BLS12_381, Modulus::BLS12_377];

    /// Build a modulus from `p`, deriving `n0`, `R` and `R^2`
    ///
    /// `p` must be odd and use all six limbs.
    pub fn new(name: &'static str, p: FieldElement) -> Result<Self> {
        check_shape(&p)?;
        let n0 = derive_n0(p.0[0]);
        Ok(Self::derive(name, p, n0))
    }

    /// Build a modulus from `p` and a caller-supplied `n0`
    pub fn with_n0(name: &'static str, p: FieldElement, n0: u64) -> Result<Self> {
        check_shape(&p)?;
        validate::parameter(
            p.0[0].wrapping_mul(n0) == u64::MAX,
            "Modulus::with_n0",
            "n0 is not -p^-1 mod 2^64",
        )?;
        Ok(Self::derive(name, p, n0))
    }

    /// Look up a built-in modulus by name, e.g. `bls12-381`
    pub fn by_name(name: &str) -> Result<Self> {
        let key = name.trim();
        Self::ALL
            .iter()
            .find(|m| {
                key.eq_ignore_ascii_case(m.name)
                    || key.eq_ignore_ascii_case(m.long_name())
            })
            .copied()
            .ok_or(evm384_api::Error::InvalidParameter {
                context: "Modulus::by_name",
                message: "unknown modulus (expected bls12-381 or bls12-377)",
            })
    }

    fn derive(name: &'static str, p: FieldElement, n0: u64) -> Self {
        // R = 2^384 mod p, R^2 = 2^768 mod p, by repeated doubling from 1
        let r = double_n(FieldElement::ONE, 384, &p);
        let r2 = double_n(r, 384, &p);
        Modulus { name, p, n0, r, r2 }
    }

    /// Short label, e.g. `BLS381`
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Lower-case hyphenated name as accepted on the command line
    pub fn long_name(&self) -> &'static str {
        match self.name {
            bls12_381::NAME => "bls12-381",
            bls12_377::NAME => "bls12-377",
            _ => self.name,
        }
    }

    /// The prime p
    pub const fn p(&self) -> &FieldElement {
        &self.p
    }

    /// `-p^-1 mod 2^64`
    pub const fn n0(&self) -> u64 {
        self.n0
    }

    /// `2^384 mod p`, the Montgomery form of one
    pub const fn r(&self) -> &FieldElement {
        &self.r
    }

    /// `2^768 mod p`
    pub const fn r2(&self) -> &FieldElement {
        &self.r2
    }

    /// The most significant limb of p
    pub const fn top_limb(&self) -> u64 {
        self.p.0[LIMBS - 1]
    }

    /// `p - 1`, the largest canonical value
    pub const fn max_element(&self) -> FieldElement {
        // p is odd, so decrementing limb 0 never borrows
        let mut v = self.p.0;
        v[0] -= 1;
        FieldElement(v)
    }

    /// Constant-time `a < p`
    pub fn is_reduced(&self, a: &FieldElement) -> Choice {
        a.ct_lt(&self.p)
    }
}

fn check_shape(p: &FieldElement) -> Result<()> {
    validate::parameter(p.0[0] & 1 == 1, "Modulus::new", "modulus must be odd")?;
    validate::parameter(
        p.0[LIMBS - 1] != 0,
        "Modulus::new",
        "modulus top limb must be nonzero",
    )
}

/// `-p0^-1 mod 2^64` by Newton iteration; each step doubles the correct bits
const fn derive_n0(p0: u64) -> u64 {
    let mut inv = 1u64;
    let mut i = 0;
    while i < 6 {
        inv = inv.wrapping_mul(2u64.wrapping_sub(p0.wrapping_mul(inv)));
        i += 1;
    }
    inv.wrapping_neg()
}

fn double_n(mut x: FieldElement, n: usize, p: &FieldElement) -> FieldElement {
    for _ in 0..n {
        x = reference::add_mod(&x, &x, p);
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;
    use evm384_api::Error;

    #[test]
    fn test_derived_constants_match_tables() {
        for m in Modulus::ALL {
            let derived = Modulus::new(m.name(), *m.p()).unwrap();
            assert_eq!(derived, m, "{}", m.name());
        }
    }

    #[test]
    fn test_n0_identity() {
        for m in Modulus::ALL {
            assert_eq!(m.p().0[0].wrapping_mul(m.n0()), u64::MAX);
        }
        assert_eq!(derive_n0(1), u64::MAX);
    }

    #[test]
    fn test_with_n0() {
        let p = *Modulus::BLS12_381.p();
        assert_eq!(
            Modulus::with_n0("BLS381", p, bls12_381::INV).unwrap(),
            Modulus::BLS12_381
        );
        assert!(matches!(
            Modulus::with_n0("BLS381", p, bls12_381::INV ^ 1),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_moduli() {
        let mut even = *Modulus::BLS12_381.p();
        even.0[0] -= 1;
        assert!(Modulus::new("even", even).is_err());

        let mut short = *Modulus::BLS12_381.p();
        short.0[5] = 0;
        assert_eq!(
            Modulus::new("short", short),
            Err(Error::InvalidParameter {
                context: "Modulus::new",
                message: "modulus top limb must be nonzero",
            })
        );
    }

    #[test]
    fn test_lookup() {
        assert_eq!(Modulus::by_name("bls12-381").unwrap(), Modulus::BLS12_381);
        assert_eq!(Modulus::by_name("BLS377").unwrap(), Modulus::BLS12_377);
        assert!(Modulus::by_name("p-384").is_err());
    }

    #[test]
    fn test_reduced() {
        let m = Modulus::BLS12_381;
        assert!(bool::from(m.is_reduced(&m.max_element())));
        assert!(!bool::from(m.is_reduced(m.p())));
    }
}
