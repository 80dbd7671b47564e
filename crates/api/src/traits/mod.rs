//! Trait definitions for arithmetic backends

pub mod arith;

pub use arith::ModArith384;
