//! Base-field moduli of pairing-friendly curves

pub mod bls12_377;
pub mod bls12_381;
