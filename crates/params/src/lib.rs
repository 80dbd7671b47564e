//! Constant values for evm384
//!
//! Curve moduli and their Montgomery parameters are stored as raw
//! little-endian limb arrays so that this crate has no dependencies.

#![no_std]

pub mod curves;
pub mod utils;

/// Number of 64-bit limbs in a 384-bit value
pub const LIMBS: usize = 6;
