//! Reduction of raw samples to per-operation figures

use crate::error::{PerfError, Result};

/// Summary of one buffer of per-outer-iteration tick counts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStats {
    pub mean: f64,
    /// Population variance, `sum((x - mean)^2) / N`
    pub variance: f64,
    /// `sum((x - mean)^2) / mean`, the figure historical reports labelled
    /// "variance"
    pub dispersion: f64,
    pub min: u64,
    pub max: u64,
    pub count: usize,
}

impl SampleStats {
    pub fn from_samples(samples: &[u64]) -> Result<Self> {
        if samples.is_empty() {
            return Err(PerfError::EmptySamples);
        }

        let n = samples.len() as f64;
        let sum: u128 = samples.iter().map(|&s| s as u128).sum();
        let mean = sum as f64 / n;
        if mean == 0.0 {
            return Err(PerfError::ZeroMean);
        }

        let ss: f64 = samples
            .iter()
            .map(|&s| {
                let d = s as f64 - mean;
                d * d
            })
            .sum();

        // Non-empty, so min and max exist
        let min = samples.iter().copied().min().unwrap_or_default();
        let max = samples.iter().copied().max().unwrap_or_default();

        Ok(Self {
            mean,
            variance: ss / n,
            dispersion: ss / mean,
            min,
            max,
            count: samples.len(),
        })
    }

    /// Standard deviation relative to the mean
    pub fn relative_std_dev(&self) -> f64 {
        self.variance.sqrt() / self.mean
    }
}

/// Statistics for one benchmarked function variant
#[derive(Debug, Clone, PartialEq)]
pub struct BenchResult {
    pub name: String,
    pub stats: SampleStats,
    pub inner_iterations: usize,
    pub cycles_per_op: f64,
    pub nsecs_per_op: f64,
    /// ns/op of each outer iteration, in run order
    pub runs_nsecs_per_op: Vec<f64>,
}

impl BenchResult {
    pub fn from_samples(
        name: impl Into<String>,
        samples: &[u64],
        inner_iterations: usize,
        cycles_per_second: u64,
    ) -> Result<Self> {
        if inner_iterations == 0 {
            return Err(PerfError::ZeroInnerIterations);
        }
        if cycles_per_second == 0 {
            return Err(PerfError::ZeroFrequency);
        }

        let stats = SampleStats::from_samples(samples)?;
        let inner = inner_iterations as f64;
        let to_ns = 1e9 / cycles_per_second as f64;
        let cycles_per_op = stats.mean / inner;

        Ok(Self {
            name: name.into(),
            stats,
            inner_iterations,
            cycles_per_op,
            nsecs_per_op: cycles_per_op * to_ns,
            runs_nsecs_per_op: samples.iter().map(|&s| s as f64 / inner * to_ns).collect(),
        })
    }
}
