//! Two-stage clock calibration
//!
//! Stage one times a loop of dependent adds whose cost is known to be one
//! cycle per add; any deviation beyond the tolerance means the core is not
//! running at the counter's rate (turbo, throttling, power saving) and every
//! derived ns/op figure would be wrong. Stage two counts ticks across a fixed
//! sleep to obtain ticks per second.

use tracing::{debug, info, warn};

use crate::config::CalibrationConfig;
use crate::cycles::{TickSource, TickUnit};
use crate::error::{PerfError, Result};

/// Outcome of a calibration run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    pub cycles_per_second: u64,
    /// `None` when the canary was skipped or bypassed
    pub cycles_per_instruction: Option<f64>,
    pub unit: TickUnit,
}

impl Calibration {
    /// Whether the canary confirmed a stable clock
    pub fn is_verified(&self) -> bool {
        self.cycles_per_instruction.is_some()
    }
}

pub struct Calibrator<S> {
    source: S,
    config: CalibrationConfig,
}

impl<S: TickSource> Calibrator<S> {
    pub fn new(source: S, config: CalibrationConfig) -> Self {
        Self { source, config }
    }

    /// Run both stages
    pub fn calibrate(&mut self) -> Result<Calibration> {
        let cpi = self.check_stability()?;
        let cycles_per_second = self.measure_cycles_per_second()?;
        Ok(Calibration {
            cycles_per_second,
            cycles_per_instruction: cpi,
            unit: self.source.unit(),
        })
    }

    /// Stage one only; `Ok(None)` when the source has no canary
    pub fn check_stability(&mut self) -> Result<Option<f64>> {
        self.config.validate()?;
        let cfg = &self.config;
        let Some(ticks) = self.source.canary(cfg.iterations) else {
            warn!(
                unit = %self.source.unit(),
                "tick source cannot run the frequency canary; skipping stability check"
            );
            return Ok(None);
        };

        let instructions = (cfg.iterations * cfg.adds_per_iteration) as f64;
        let cpi = ticks as f64 / instructions;
        let expected = cfg.expected_cycles_per_instruction;
        debug!(ticks, instructions, cpi, "frequency canary");

        // a NaN ratio must not pass as stable
        if !((cpi - expected).abs() <= expected * cfg.tolerance) {
            return Err(PerfError::CalibrationUnstable {
                cycles_per_instruction: cpi,
                expected,
                tolerance_pct: cfg.tolerance * 100.0,
            });
        }
        Ok(Some(cpi))
    }

    /// Stage two only: ticks elapsed per second of sleep
    pub fn measure_cycles_per_second(&mut self) -> Result<u64> {
        self.config.validate()?;
        let sleep = self.config.sleep;
        let start = self.source.read();
        self.source.sleep(sleep);
        let end = self.source.read();

        let ticks = end.wrapping_sub(start) as u128;
        let per_second = ticks * 1_000_000_000 / sleep.as_nanos().max(1);
        if per_second == 0 {
            return Err(PerfError::ZeroFrequency);
        }
        info!(cycles_per_second = per_second as u64, "measured tick rate");
        Ok(per_second as u64)
    }

    /// Calibrate, or with `skip_check` fall back to stage two on instability
    pub fn establish(&mut self, skip_check: bool) -> Result<Calibration> {
        match self.calibrate() {
            Err(err @ PerfError::CalibrationUnstable { .. }) if skip_check => {
                warn!(%err, "continuing without a stable clock; ns/op figures are unreliable");
                Ok(Calibration {
                    cycles_per_second: self.measure_cycles_per_second()?,
                    cycles_per_instruction: None,
                    unit: self.source.unit(),
                })
            }
            other => other,
        }
    }

    pub fn into_source(self) -> S {
        self.source
    }
}
