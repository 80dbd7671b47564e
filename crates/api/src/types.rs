//! Core value types shared by every evm384 component
//!
//! [`FieldElement`] is the single representation consumed by the reference
//! engine, the optimized engines and the measurement harness. It is a plain
//! 384-bit unsigned integer; whether it is reduced, or in Montgomery form, is
//! bookkeeping left to the caller.

use core::fmt;
use evm384_internal::arith::sbb;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::error::validate;
use crate::Result;

/// Number of 64-bit limbs in a field element
pub const LIMBS: usize = 6;

/// Size of the big-endian byte encoding of a field element
pub const FIELD_BYTES: usize = LIMBS * 8;

/// A 384-bit unsigned integer stored as six little-endian 64-bit limbs
///
/// Limb 0 is the least significant. The value is `sum(limb[i] * 2^(64*i))`.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldElement(pub [u64; LIMBS]);

impl FieldElement {
    /// The integer zero
    pub const ZERO: FieldElement = FieldElement([0; LIMBS]);

    /// The integer one (not the Montgomery one)
    pub const ONE: FieldElement = FieldElement([1, 0, 0, 0, 0, 0]);

    /// Wrap raw limbs
    #[inline]
    pub const fn from_limbs(limbs: [u64; LIMBS]) -> Self {
        FieldElement(limbs)
    }

    /// Borrow the raw limbs
    #[inline]
    pub const fn limbs(&self) -> &[u64; LIMBS] {
        &self.0
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&FieldElement::ZERO)
    }

    /// Constant-time `self < other`
    pub fn ct_lt(&self, other: &FieldElement) -> Choice {
        let mut borrow = 0u64;
        for i in 0..LIMBS {
            let (_, b) = sbb(self.0[i], other.0[i], borrow);
            borrow = b;
        }
        Choice::from(borrow as u8)
    }

    /// Decode from 48 big-endian bytes
    pub fn from_be_bytes(bytes: &[u8; FIELD_BYTES]) -> Self {
        let mut limbs = [0u64; LIMBS];
        for (i, chunk) in bytes.chunks_exact(8).enumerate() {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            limbs[LIMBS - 1 - i] = u64::from_be_bytes(word);
        }
        FieldElement(limbs)
    }

    /// Encode to 48 big-endian bytes
    pub fn to_be_bytes(&self) -> [u8; FIELD_BYTES] {
        let mut res = [0u8; FIELD_BYTES];
        for (i, chunk) in res.chunks_exact_mut(8).enumerate() {
            chunk.copy_from_slice(&self.0[LIMBS - 1 - i].to_be_bytes());
        }
        res
    }

    /// Decode from a byte slice, checking its length
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("FieldElement::from_be_slice", bytes.len(), FIELD_BYTES)?;
        let mut buf = [0u8; FIELD_BYTES];
        buf.copy_from_slice(bytes);
        Ok(Self::from_be_bytes(&buf))
    }

    /// Decode a value and require it to be below `modulus`
    pub fn from_be_bytes_reduced(bytes: &[u8; FIELD_BYTES], modulus: &FieldElement) -> Result<Self> {
        let value = Self::from_be_bytes(bytes);
        validate::canonical(bool::from(value.ct_lt(modulus)), "FieldElement::from_be_bytes_reduced")?;
        Ok(value)
    }

    /// Parse big-endian hex, with or without a `0x` prefix
    #[cfg(feature = "std")]
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits)?;
        Self::from_be_slice(&bytes).map_err(|e| e.with_context("FieldElement::from_hex"))
    }

    /// Render as 96 big-endian hex digits
    #[cfg(feature = "std")]
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_be_bytes())
    }
}

impl From<[u64; LIMBS]> for FieldElement {
    fn from(limbs: [u64; LIMBS]) -> Self {
        FieldElement(limbs)
    }
}

impl From<FieldElement> for [u64; LIMBS] {
    fn from(fe: FieldElement) -> Self {
        fe.0
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x")?;
        for limb in self.0.iter().rev() {
            write!(f, "{:016x}", limb)?;
        }
        Ok(())
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
            & self.0[4].ct_eq(&other.0[4])
            & self.0[5].ct_eq(&other.0[5])
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        FieldElement([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
            u64::conditional_select(&a.0[4], &b.0[4], choice),
            u64::conditional_select(&a.0[5], &b.0[5], choice),
        ])
    }
}

/// The three arithmetic operations every backend provides
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Modular addition
    Add,
    /// Modular subtraction
    Sub,
    /// Montgomery multiplication
    MulMont,
}

impl Operation {
    /// All operations, in report order
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Sub, Operation::MulMont];

    /// Short label used in benchmark names and mismatch reports
    pub const fn label(&self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Sub => "Sub",
            Operation::MulMont => "Mul",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}
