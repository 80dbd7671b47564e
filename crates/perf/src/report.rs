//! Console reports
//!
//! Three renderings of the same results: a verbose per-result dump, a
//! table, and `benchstat`-compatible lines (one per outer run, Go benchmark
//! syntax).

use std::fmt;
use std::io::Write;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::calibrate::Calibration;
use crate::error::{PerfError, Result};
use crate::stats::BenchResult;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ReportFormat {
    Verbose,
    #[default]
    Table,
    Benchstat,
}

impl FromStr for ReportFormat {
    type Err = PerfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "verbose" => Ok(ReportFormat::Verbose),
            "table" => Ok(ReportFormat::Table),
            "benchstat" => Ok(ReportFormat::Benchstat),
            _ => Err(PerfError::Usage(format!("unknown report format '{s}'"))),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReportFormat::Verbose => "verbose",
            ReportFormat::Table => "table",
            ReportFormat::Benchstat => "benchstat",
        };
        f.write_str(s)
    }
}

/// Run-wide facts printed above the results
#[derive(Debug, Clone)]
pub struct ReportHeader {
    pub calibration: Calibration,
    pub outer_iterations: usize,
    pub inner_iterations: usize,
    pub modulus: &'static str,
    pub started: SystemTime,
}

/// Ordered results of one process run
#[derive(Debug, Clone)]
pub struct Report {
    header: ReportHeader,
    results: Vec<BenchResult>,
    elapsed: Option<Duration>,
}

impl Report {
    pub fn new(header: ReportHeader) -> Self {
        Self {
            header,
            results: Vec::new(),
            elapsed: None,
        }
    }

    pub fn push(&mut self, result: BenchResult) {
        self.results.push(result);
    }

    pub fn extend(&mut self, results: impl IntoIterator<Item = BenchResult>) {
        self.results.extend(results);
    }

    pub fn finish(&mut self, elapsed: Duration) {
        self.elapsed = Some(elapsed);
    }

    pub fn results(&self) -> &[BenchResult] {
        &self.results
    }

    pub fn header(&self) -> &ReportHeader {
        &self.header
    }

    pub fn render<W: Write>(&self, format: ReportFormat, out: &mut W) -> Result<()> {
        match format {
            ReportFormat::Verbose => {
                self.write_header(out)?;
                self.write_verbose(out)?;
                self.write_footer(out)?;
            }
            ReportFormat::Table => {
                self.write_header(out)?;
                self.write_table(out)?;
                self.write_footer(out)?;
            }
            ReportFormat::Benchstat => self.write_benchstat(out)?,
        }
        out.flush()?;
        Ok(())
    }

    fn write_header<W: Write>(&self, out: &mut W) -> Result<()> {
        let h = &self.header;
        let started = h
            .started
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();

        writeln!(out, "Run started (unix time): {started}")?;
        writeln!(out, "Target: {}-{}", std::env::consts::ARCH, std::env::consts::OS)?;
        writeln!(out, "Modulus: {}", h.modulus)?;
        writeln!(
            out,
            "Clock: {} {}/s{}",
            h.calibration.cycles_per_second,
            h.calibration.unit,
            if h.calibration.is_verified() { "" } else { " (unverified)" }
        )?;
        writeln!(
            out,
            "Iterations: {} outer x {} inner",
            h.outer_iterations, h.inner_iterations
        )?;
        writeln!(out)?;
        Ok(())
    }

    fn write_footer<W: Write>(&self, out: &mut W) -> Result<()> {
        if let Some(elapsed) = self.elapsed {
            writeln!(out)?;
            writeln!(out, "Total runtime: {:.3} s", elapsed.as_secs_f64())?;
        }
        Ok(())
    }

    fn write_verbose<W: Write>(&self, out: &mut W) -> Result<()> {
        for r in &self.results {
            let s = &r.stats;
            writeln!(out, "{}", r.name)?;
            writeln!(out, "  mean:       {:.1}", s.mean)?;
            writeln!(out, "  variance:   {:.1}", s.variance)?;
            writeln!(out, "  dispersion: {:.1}", s.dispersion)?;
            writeln!(out, "  min:        {}", s.min)?;
            writeln!(out, "  max:        {}", s.max)?;
            writeln!(out, "  cycles/op:  {:.2}", r.cycles_per_op)?;
            writeln!(out, "  nsecs/op:   {:.2}", r.nsecs_per_op)?;
        }
        Ok(())
    }

    fn write_table<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{:<40}{:>10}{:>10}", "Benchmark", "cyc/op", "ns/op")?;
        writeln!(out, "{}", "_".repeat(60))?;
        for r in &self.results {
            writeln!(
                out,
                "{:<40}{:>10.2}{:>10.2}",
                r.name, r.cycles_per_op, r.nsecs_per_op
            )?;
        }
        Ok(())
    }

    fn write_benchstat<W: Write>(&self, out: &mut W) -> Result<()> {
        for r in &self.results {
            for ns in &r.runs_nsecs_per_op {
                writeln!(
                    out,
                    "Benchmark{:<30}{:>12}{:>16.3} ns/op",
                    r.name, r.inner_iterations, ns
                )?;
            }
        }
        Ok(())
    }
}
