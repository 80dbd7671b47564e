//! # evm384
//!
//! Constant-time 384-bit modular arithmetic (add, subtract, Montgomery
//! multiply) with a cycle-accurate benchmark and cross-validation harness.
//!
//! ## Features
//!
//! - `std` (default): standard library support in the member crates
//! - `perf` (default): the measurement harness and its binaries
//! - `extern-oracle`: link the blst routines as the optimized oracle
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`evm384-api`]: `FieldElement`, `Operation`, the `ModArith384` trait, errors
//! - [`evm384-internal`]: limb primitives and constant-time selection
//! - [`evm384-params`]: modulus and harness constants
//! - [`evm384-algorithms`]: the reference and unrolled engines, `Modulus`
//! - [`evm384-perf`]: cycle counter, calibration, driver, statistics, validation

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use evm384_algorithms as algorithms;
pub use evm384_api as api;
pub use evm384_internal as internal;
pub use evm384_params as params;

// Feature-gated re-exports
#[cfg(feature = "perf")]
pub use evm384_perf as perf;

/// Common imports for evm384 users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Core value types and the backend trait
    pub use crate::api::{FieldElement, ModArith384, Operation};

    // Engines and moduli
    pub use crate::algorithms::{from_montgomery, to_montgomery, Modulus, Reference, Unrolled};

    #[cfg(feature = "extern-oracle")]
    pub use crate::algorithms::ExternOracle;

    // Harness entry points
    #[cfg(feature = "perf")]
    pub use crate::perf::{
        BenchConfig, BenchDriver, Calibrator, CrossValidator, OperandMode, PerfError, Report,
        ReportFormat,
    };
}
