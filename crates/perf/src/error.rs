//! Structured error types for the measurement harness

use evm384_api::Operation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PerfError {
    #[error(
        "clock frequency unstable: canary measured {cycles_per_instruction:.3} cycles/instruction \
         (expected {expected:.2} +/- {tolerance_pct:.0}%)"
    )]
    CalibrationUnstable {
        cycles_per_instruction: f64,
        expected: f64,
        tolerance_pct: f64,
    },

    #[error(
        "mismatch in {operation} at iteration {iteration}, limb {limb}: \
         {left:#018x} != {right:#018x}"
    )]
    Mismatch {
        operation: Operation,
        limb: usize,
        left: u64,
        right: u64,
        iteration: u64,
    },

    #[error("no samples recorded")]
    EmptySamples,

    #[error("mean of samples is zero; dispersion is undefined")]
    ZeroMean,

    #[error("inner iteration count must be nonzero")]
    ZeroInnerIterations,

    #[error("measured zero ticks per second")]
    ZeroFrequency,

    #[error("invalid configuration: {0}")]
    Config(&'static str),

    #[error("usage: {0}")]
    Usage(String),

    #[error("arithmetic set-up failed: {0}")]
    Api(#[from] evm384_api::Error),

    #[error("report output failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PerfError>;

impl PerfError {
    /// Process exit code the command-line tools use for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            PerfError::Usage(_) | PerfError::Config(_) | PerfError::Api(_) => 2,
            _ => 1,
        }
    }
}
