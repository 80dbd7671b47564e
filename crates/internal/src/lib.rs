//! Internal utilities for the evm384 workspace
//!
//! Nothing in here is part of the stable API. The helpers are shared by the
//! portable and the unrolled arithmetic engines so that both widen through
//! the same 128-bit intermediates.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

pub mod arch;
pub mod arith;
pub mod constant_time;
