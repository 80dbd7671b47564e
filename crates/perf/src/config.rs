//! Harness configuration
//!
//! Defaults reproduce the "fast" run of the reference harness: 10 outer
//! samples of 1 000 000 calls each, operands seeded with 1.

use std::time::Duration;

use evm384_algorithms::Modulus;
use evm384_params::utils::harness::{
    CALIBRATION_ITERATIONS, CALIBRATION_SLEEP_MS, CALIBRATION_TOLERANCE,
    CANARY_ADDS_PER_ITERATION, DEFAULT_SEED, EXPECTED_CYCLES_PER_INSTRUCTION, INNER_ITERS_FAST,
    OUTER_ITERS_FAST, VALIDATION_ITERATIONS,
};

use crate::error::{PerfError, Result};
use crate::report::ReportFormat;

/// Parameters of the two-stage frequency check
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationConfig {
    pub iterations: u64,
    pub adds_per_iteration: u64,
    pub expected_cycles_per_instruction: f64,
    pub tolerance: f64, // relative
    pub sleep: Duration,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            iterations: CALIBRATION_ITERATIONS,
            adds_per_iteration: CANARY_ADDS_PER_ITERATION,
            expected_cycles_per_instruction: EXPECTED_CYCLES_PER_INSTRUCTION,
            tolerance: CALIBRATION_TOLERANCE,
            sleep: Duration::from_millis(CALIBRATION_SLEEP_MS),
        }
    }
}

impl CalibrationConfig {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_sleep(mut self, sleep: Duration) -> Self {
        self.sleep = sleep;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 || self.adds_per_iteration == 0 {
            return Err(PerfError::Config("calibration loop must be nonempty"));
        }
        if !(self.tolerance > 0.0 && self.tolerance < 1.0) {
            return Err(PerfError::Config("calibration tolerance must be in (0, 1)"));
        }
        if self.sleep.is_zero() {
            return Err(PerfError::Config("calibration sleep must be nonzero"));
        }
        Ok(())
    }
}

/// Benchmark run configuration
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub outer_iterations: usize,
    pub inner_iterations: usize,
    pub seed: u64,
    pub skip_cycle_check: bool,
    pub format: ReportFormat,
    pub modulus: Modulus,
    pub include_reference: bool, // also time the loop-based engine
    pub calibration: CalibrationConfig,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            outer_iterations: OUTER_ITERS_FAST,
            inner_iterations: INNER_ITERS_FAST,
            seed: DEFAULT_SEED,
            skip_cycle_check: false,
            format: ReportFormat::Table,
            modulus: Modulus::BLS12_381,
            include_reference: true,
            calibration: CalibrationConfig::default(),
        }
    }
}

// Builder methods for easy customization
impl BenchConfig {
    pub fn with_iterations(mut self, outer: usize, inner: usize) -> Self {
        self.outer_iterations = outer;
        self.inner_iterations = inner;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_skip_cycle_check(mut self, skip: bool) -> Self {
        self.skip_cycle_check = skip;
        self
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_modulus(mut self, modulus: Modulus) -> Self {
        self.modulus = modulus;
        self
    }

    pub fn with_reference(mut self, include: bool) -> Self {
        self.include_reference = include;
        self
    }

    pub fn with_calibration(mut self, calibration: CalibrationConfig) -> Self {
        self.calibration = calibration;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.outer_iterations == 0 {
            return Err(PerfError::Config("outer iterations must be nonzero"));
        }
        if self.inner_iterations == 0 {
            return Err(PerfError::Config("inner iterations must be nonzero"));
        }
        self.calibration.validate()
    }
}

// Predefined configurations
impl BenchConfig {
    /// The standard run
    pub fn fast() -> Self {
        Self::default().with_iterations(OUTER_ITERS_FAST, INNER_ITERS_FAST)
    }

    /// A short run for tests and smoke checks
    pub fn quick() -> Self {
        Self::default()
            .with_iterations(3, 1_000)
            .with_calibration(CalibrationConfig::default().with_sleep(Duration::from_millis(50)))
    }
}

/// Cross-validation run configuration
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    pub iterations: u64,
    pub seed: u64,
    pub modulus: Modulus,
    pub progress_every: u64, // 0 disables progress events
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            iterations: VALIDATION_ITERATIONS,
            seed: DEFAULT_SEED,
            modulus: Modulus::BLS12_381,
            progress_every: 10_000_000,
        }
    }
}

impl ValidationConfig {
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_modulus(mut self, modulus: Modulus) -> Self {
        self.modulus = modulus;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(PerfError::Config("validation needs at least one iteration"));
        }
        Ok(())
    }
}
