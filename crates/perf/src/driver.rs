//! Warm-up and timed passes over one operation

use std::fmt;
use std::hint::black_box;

use evm384_algorithms::{FieldElement, ModArith384, Modulus, Operation};
use tracing::debug;

use crate::cycles::{CycleCounter, RawSampleBuffer, TickSource};
use crate::error::{PerfError, Result};
use crate::operands::OperandPair;
use crate::stats::BenchResult;

/// How the inner loop supplies operands
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OperandMode {
    /// Every call sees the same fixed inputs
    Same,
    /// Each call's output becomes the next call's left operand
    Diff,
}

impl OperandMode {
    pub const ALL: [OperandMode; 2] = [OperandMode::Same, OperandMode::Diff];

    pub const fn label(&self) -> &'static str {
        match self {
            OperandMode::Same => "Same",
            OperandMode::Diff => "Diff",
        }
    }
}

impl fmt::Display for OperandMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Owns the counter and the sample buffer shared by every case it runs
pub struct BenchDriver<S> {
    counter: CycleCounter<S>,
    samples: RawSampleBuffer,
    inner_iterations: usize,
    cycles_per_second: u64,
}

impl<S: TickSource> BenchDriver<S> {
    pub fn new(
        source: S,
        outer_iterations: usize,
        inner_iterations: usize,
        cycles_per_second: u64,
    ) -> Result<Self> {
        if outer_iterations == 0 {
            return Err(PerfError::EmptySamples);
        }
        if inner_iterations == 0 {
            return Err(PerfError::ZeroInnerIterations);
        }
        if cycles_per_second == 0 {
            return Err(PerfError::ZeroFrequency);
        }
        Ok(Self {
            counter: CycleCounter::new(source),
            samples: RawSampleBuffer::new(outer_iterations),
            inner_iterations,
            cycles_per_second,
        })
    }

    pub fn outer_iterations(&self) -> usize {
        self.samples.len()
    }

    pub fn inner_iterations(&self) -> usize {
        self.inner_iterations
    }

    /// Time `f`: `outer` untimed calls, then `outer` samples of `inner` calls
    pub fn run<F>(&mut self, name: &str, mut f: F) -> Result<BenchResult>
    where
        F: FnMut(),
    {
        let outer = self.samples.len();
        let inner = self.inner_iterations;

        for _ in 0..outer {
            f();
        }

        self.samples.clear();
        for slot in 0..outer {
            self.counter.start();
            for _ in 0..inner {
                f();
            }
            self.counter.end(slot, &mut self.samples);
        }

        let result =
            BenchResult::from_samples(name, self.samples.as_slice(), inner, self.cycles_per_second)?;
        debug!(
            name,
            cycles_per_op = result.cycles_per_op,
            nsecs_per_op = result.nsecs_per_op,
            "benchmark finished"
        );
        Ok(result)
    }

    /// Time one arithmetic operation on `engine`
    pub fn run_operation<E: ModArith384 + ?Sized>(
        &mut self,
        name: &str,
        engine: &E,
        op: Operation,
        mode: OperandMode,
        operands: &OperandPair,
        modulus: &Modulus,
    ) -> Result<BenchResult> {
        let p = modulus.p();
        let n0 = modulus.n0();
        let OperandPair { a, b } = *operands;

        match mode {
            OperandMode::Same => self.run(name, || {
                black_box(engine.apply(op, black_box(&a), black_box(&b), p, n0));
            }),
            OperandMode::Diff => {
                let mut x: FieldElement = a;
                let result = self.run(name, || {
                    x = engine.apply(op, &x, black_box(&b), p, n0);
                });
                black_box(x);
                result
            }
        }
    }

    pub fn into_source(self) -> S {
        self.counter.into_source()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycles::SyntheticTicks;
    use crate::operands::OperandGenerator;
    use evm384_algorithms::{Reference, Unrolled};
    use std::cell::Cell;

    #[test]
    fn test_call_counts() {
        let mut driver =
            BenchDriver::new(SyntheticTicks::new(1_000, 1.0).with_ticks_per_read(5), 4, 25, 1_000)
                .unwrap();
        let calls = Cell::new(0usize);
        let result = driver.run("count", || calls.set(calls.get() + 1)).unwrap();

        // warm-up plus timed passes
        assert_eq!(calls.get(), 4 + 4 * 25);
        assert_eq!(result.stats.count, 4);
        assert_eq!(result.stats.mean, 5.0);
        assert_eq!(result.cycles_per_op, 0.2);
        assert_eq!(result.runs_nsecs_per_op.len(), 4);
    }

    #[test]
    fn test_buffer_reused_across_cases() {
        let mut driver =
            BenchDriver::new(SyntheticTicks::new(1_000, 1.0).with_ticks_per_read(3), 2, 1, 1_000)
                .unwrap();
        let first = driver.run("a", || {}).unwrap();
        let second = driver.run("b", || {}).unwrap();
        assert_eq!(first.stats, second.stats);
        assert_eq!(driver.outer_iterations(), 2);
    }

    #[test]
    fn test_operation_modes() {
        let m = Modulus::BLS12_381;
        let operands = OperandGenerator::new(1, &m).next_pair();
        let mut driver =
            BenchDriver::new(SyntheticTicks::new(1_000, 1.0).with_ticks_per_read(1), 2, 10, 1_000)
                .unwrap();

        for op in Operation::ALL {
            for mode in OperandMode::ALL {
                let r = driver
                    .run_operation("case", &Unrolled, op, mode, &operands, &m)
                    .unwrap();
                assert_eq!(r.inner_iterations, 10);
                let r = driver
                    .run_operation("case", &Reference, op, mode, &operands, &m)
                    .unwrap();
                assert_eq!(r.stats.count, 2);
            }
        }
    }

    #[test]
    fn test_rejects_degenerate_shapes() {
        let src = || SyntheticTicks::new(1, 1.0);
        assert!(BenchDriver::new(src(), 0, 1, 1).is_err());
        assert!(BenchDriver::new(src(), 1, 0, 1).is_err());
        assert!(BenchDriver::new(src(), 1, 1, 0).is_err());
    }

    #[test]
    fn test_real_clock_smoke() {
        let mut driver = BenchDriver::new(crate::cycles::HardwareTicks, 2, 100, 1_000_000_000).unwrap();
        let m = Modulus::BLS12_381;
        let operands = OperandGenerator::new(1, &m).next_pair();
        let r = driver
            .run_operation("mul", &Unrolled, Operation::MulMont, OperandMode::Diff, &operands, &m)
            .unwrap();
        assert!(r.cycles_per_op > 0.0);
    }
}
