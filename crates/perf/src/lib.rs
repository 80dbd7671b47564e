//! Measurement and cross-validation harness for the evm384 engines
//!
//! The pieces, leaves first:
//!
//! - [`cycles`]: fenced tick counter, [`TickSource`], [`CycleCounter`]
//! - [`calibrate`]: frequency-stability canary and ticks-per-second
//! - [`driver`]: warm-up plus timed passes of one operation
//! - [`stats`]: mean, variance, min, max, cycles/op, ns/op
//! - [`report`]: verbose, table and benchstat output
//! - [`validate`]: first-mismatch-halts comparison of two backends
//!
//! [`suite`] ties them together for the `evm384-bench` binary.

#![deny(unsafe_code)]

pub mod calibrate;
pub mod cli;
pub mod config;
pub mod cycles;
pub mod driver;
pub mod error;
pub mod logging;
pub mod operands;
pub mod report;
pub mod stats;
pub mod suite;
pub mod validate;

pub use calibrate::{Calibration, Calibrator};
pub use config::{BenchConfig, CalibrationConfig, ValidationConfig};
pub use cycles::{
    read_monotonic_ticks, CycleCounter, HardwareTicks, RawSampleBuffer, SyntheticTicks,
    TickSource, TickUnit,
};
pub use driver::{BenchDriver, OperandMode};
pub use error::{PerfError, Result};
pub use operands::{OperandGenerator, OperandPair};
pub use report::{Report, ReportFormat};
pub use stats::{BenchResult, SampleStats};
pub use validate::{CrossValidator, ValidationSummary};
