//! Constant-time 384-bit modular arithmetic
//!
//! This crate provides the arithmetic engines driven by the evm384 harness:
//!
//! - [`Reference`]: portable, loop-based add, subtract and CIOS Montgomery
//!   multiplication, written for clarity of carry handling
//! - [`Unrolled`]: straight-line code using native carry instructions where
//!   the target has them; the platform-optimized engine
//! - [`ExternOracle`] (feature `extern-oracle`): the blst assembly routines
//!   behind a foreign-function boundary
//!
//! All three implement [`ModArith384`] and must agree bit for bit. None of
//! them branch on operand values or allocate.
//!
//! [`Modulus`] bundles a prime with its derived Montgomery constants so that
//! the modulus is an explicit value passed to every call.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]

pub use evm384_api::{Error, FieldElement, ModArith384, Operation, Result, LIMBS};

pub mod field;
pub use field::{reference::Reference, unrolled::Unrolled};

pub mod modulus;
pub use modulus::Modulus;

pub mod montgomery;
pub use montgomery::{from_montgomery, to_montgomery};

#[cfg(feature = "extern-oracle")]
pub mod backend;
#[cfg(feature = "extern-oracle")]
pub use backend::ffi::ExternOracle;
