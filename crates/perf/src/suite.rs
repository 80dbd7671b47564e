//! The full benchmark suite: every engine, operation and operand mode

use std::time::{Instant, SystemTime};

use evm384_algorithms::{ModArith384, Modulus, Operation, Reference};
use tracing::info;

use crate::calibrate::Calibrator;
use crate::config::BenchConfig;
use crate::cycles::TickSource;
use crate::driver::{BenchDriver, OperandMode};
use crate::error::Result;
use crate::operands::{OperandGenerator, OperandPair};
use crate::report::{Report, ReportHeader};
use crate::stats::BenchResult;

/// An engine together with the suffix its benchmark names carry
#[derive(Copy, Clone)]
pub struct NamedEngine<'a> {
    pub engine: &'a dyn ModArith384,
    pub suffix: &'static str,
}

/// The platform-optimized engine of this build
pub fn oracle() -> &'static dyn ModArith384 {
    #[cfg(feature = "extern-oracle")]
    {
        &evm384_algorithms::ExternOracle
    }
    #[cfg(not(feature = "extern-oracle"))]
    {
        &evm384_algorithms::Unrolled
    }
}

/// Engines in report order; the loop-based reference is suffixed `NoAsm`
pub fn default_engines(include_reference: bool) -> Vec<NamedEngine<'static>> {
    let mut engines = vec![NamedEngine {
        engine: oracle(),
        suffix: "",
    }];
    if include_reference {
        engines.push(NamedEngine {
            engine: &Reference,
            suffix: "NoAsm",
        });
    }
    engines
}

/// e.g. `EVM384MulBLS381DiffNoAsm`
pub fn bench_name(op: Operation, modulus: &Modulus, mode: OperandMode, suffix: &str) -> String {
    format!("EVM384{}{}{}{}", op.label(), modulus.name(), mode.label(), suffix)
}

/// Run every (engine, operation, mode) case through `driver`
pub fn run_suite<S: TickSource>(
    driver: &mut BenchDriver<S>,
    engines: &[NamedEngine<'_>],
    modulus: &Modulus,
    operands: &OperandPair,
) -> Result<Vec<BenchResult>> {
    let mut results = Vec::with_capacity(engines.len() * Operation::ALL.len() * 2);
    for named in engines {
        for op in Operation::ALL {
            for mode in OperandMode::ALL {
                let name = bench_name(op, modulus, mode, named.suffix);
                info!(%name, engine = named.engine.name(), "running benchmark");
                results.push(driver.run_operation(&name, named.engine, op, mode, operands, modulus)?);
            }
        }
    }
    Ok(results)
}

/// Calibrate `source`, then benchmark the configured suite on it
pub fn run_benchmarks<S: TickSource>(config: &BenchConfig, source: S) -> Result<Report> {
    config.validate()?;
    let started = SystemTime::now();
    let clock = Instant::now();

    let mut calibrator = Calibrator::new(source, config.calibration.clone());
    let calibration = calibrator.establish(config.skip_cycle_check)?;

    let mut driver = BenchDriver::new(
        calibrator.into_source(),
        config.outer_iterations,
        config.inner_iterations,
        calibration.cycles_per_second,
    )?;
    let operands = OperandGenerator::new(config.seed, &config.modulus).next_pair();
    let engines = default_engines(config.include_reference);

    let mut report = Report::new(ReportHeader {
        calibration,
        outer_iterations: config.outer_iterations,
        inner_iterations: config.inner_iterations,
        modulus: config.modulus.name(),
        started,
    });
    report.extend(run_suite(&mut driver, &engines, &config.modulus, &operands)?);
    report.finish(clock.elapsed());
    Ok(report)
}
