//! Public API traits and types for the evm384 arithmetic engine
//!
//! This crate provides the shared vocabulary of the evm384 workspace: the
//! fixed-width [`FieldElement`] representation, the [`Operation`] tag used in
//! reports, the [`ModArith384`] trait every arithmetic backend implements, and
//! the error types returned when a modulus or an encoding is rejected.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::{FieldElement, Operation, FIELD_BYTES, LIMBS};

pub use traits::ModArith384;
