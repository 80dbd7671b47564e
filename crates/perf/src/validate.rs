//! Cross-validation of two arithmetic backends
//!
//! Feeds identical random operands to both sides for every operation and
//! stops at the first limb that differs.

use std::time::{Duration, Instant};

use evm384_algorithms::{FieldElement, ModArith384, Modulus, Operation};
use tracing::{error, info};

use crate::error::{PerfError, Result};
use crate::operands::OperandGenerator;

/// Totals of a validation run that found no disagreement
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationSummary {
    pub iterations: u64,
    pub comparisons: u64,
    pub elapsed: Duration,
}

/// Index of the first limb where `left` and `right` differ
pub fn first_mismatch(left: &FieldElement, right: &FieldElement) -> Option<usize> {
    left.0.iter().zip(right.0.iter()).position(|(l, r)| l != r)
}

pub struct CrossValidator<L, R> {
    left: L,
    right: R,
    modulus: Modulus,
    operands: OperandGenerator,
    progress_every: u64,
}

impl<L: ModArith384, R: ModArith384> CrossValidator<L, R> {
    /// `left` is the reference, `right` the oracle under test
    pub fn new(left: L, right: R, modulus: Modulus, seed: u64) -> Self {
        Self {
            left,
            right,
            operands: OperandGenerator::new(seed, &modulus),
            modulus,
            progress_every: 0,
        }
    }

    /// Emit an `info` event every `every` iterations; 0 disables
    pub fn with_progress(mut self, every: u64) -> Self {
        self.progress_every = every;
        self
    }

    pub fn validate(&mut self, iterations: u64) -> Result<ValidationSummary> {
        let started = Instant::now();
        let p = *self.modulus.p();
        let n0 = self.modulus.n0();

        info!(
            iterations,
            modulus = self.modulus.name(),
            left = self.left.name(),
            right = self.right.name(),
            "cross-validation started"
        );

        for iteration in 0..iterations {
            let pair = self.operands.next_pair();

            for op in Operation::ALL {
                let l = self.left.apply(op, &pair.a, &pair.b, &p, n0);
                let r = self.right.apply(op, &pair.a, &pair.b, &p, n0);

                if let Some(limb) = first_mismatch(&l, &r) {
                    error!(
                        operation = %op,
                        iteration,
                        a = %pair.a,
                        b = %pair.b,
                        left = %l,
                        right = %r,
                        "ERROR - mismatch in {}",
                        op
                    );
                    return Err(PerfError::Mismatch {
                        operation: op,
                        limb,
                        left: l.0[limb],
                        right: r.0[limb],
                        iteration,
                    });
                }
            }

            if self.progress_every != 0 && (iteration + 1) % self.progress_every == 0 {
                info!(done = iteration + 1, "cross-validation progress");
            }
        }

        let summary = ValidationSummary {
            iterations,
            comparisons: iterations * Operation::ALL.len() as u64,
            elapsed: started.elapsed(),
        };
        info!(?summary, "cross-validation passed");
        Ok(summary)
    }
}
