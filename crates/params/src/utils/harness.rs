//! Constants for the measurement harness

/// Outer iterations (timed samples) in the default benchmark run
pub const OUTER_ITERS_FAST: usize = 10;

/// Operation calls per timed sample in the default benchmark run
pub const INNER_ITERS_FAST: usize = 1_000_000;

/// Iterations of the frequency canary loop
pub const CALIBRATION_ITERATIONS: u64 = 100_000;

/// Dependent adds per canary iteration
pub const CANARY_ADDS_PER_ITERATION: u64 = 20;

/// Expected ticks per canary add on a stable clock
pub const EXPECTED_CYCLES_PER_INSTRUCTION: f64 = 1.0;

/// Allowed relative deviation from the expected canary cost
pub const CALIBRATION_TOLERANCE: f64 = 0.01;

/// Length of the sleep used to count ticks per second, in milliseconds
pub const CALIBRATION_SLEEP_MS: u64 = 1_000;

/// Random trials in a full cross-validation run
pub const VALIDATION_ITERATIONS: u64 = 100_000_000;

/// Seed for operand generation when none is given
pub const DEFAULT_SEED: u64 = 1;
