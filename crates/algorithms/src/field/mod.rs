//! Modular arithmetic engines over six 64-bit limbs
//!
//! Both engines share the final step of addition and multiplication: given
//! an unreduced value `carry * 2^384 + tmp` known to be below `2p`, subtract
//! `p` once and keep whichever of the two candidates is in range, selected
//! with a mask rather than a branch.

pub mod reference;
pub mod unrolled;
