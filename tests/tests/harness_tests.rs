//! Calibration, driver and report behaviour on synthetic clocks

use evm384_perf::suite::run_benchmarks;
use evm384_perf::{
    BenchConfig, CalibrationConfig, Calibrator, PerfError, ReportFormat, SyntheticTicks,
};

const TICKS_PER_SECOND: u64 = 3_200_000_000;

#[test]
fn test_calibration_stable_at_exact_cost() {
    let mut c = Calibrator::new(
        SyntheticTicks::new(TICKS_PER_SECOND, 1.00),
        CalibrationConfig::default(),
    );
    let cal = c.calibrate().unwrap();
    assert_eq!(cal.cycles_per_second, TICKS_PER_SECOND);
    assert_eq!(cal.cycles_per_instruction, Some(1.0));
}

#[test]
fn test_calibration_unstable_at_five_percent() {
    let mut c = Calibrator::new(
        SyntheticTicks::new(TICKS_PER_SECOND, 1.05),
        CalibrationConfig::default(),
    );
    assert!(matches!(c.calibrate(), Err(PerfError::CalibrationUnstable { .. })));
}

#[test]
fn test_reports_render_for_every_format() {
    let config = BenchConfig::quick().with_reference(true);
    let report = run_benchmarks(
        &config,
        SyntheticTicks::new(TICKS_PER_SECOND, 1.0).with_ticks_per_read(10_000),
    )
    .unwrap();

    let mut table = Vec::new();
    report.render(ReportFormat::Table, &mut table).unwrap();
    let table = String::from_utf8(table).unwrap();
    assert!(table.contains("EVM384SubBLS381Diff"));
    assert!(table.contains("EVM384MulBLS381SameNoAsm"));

    let mut lines = Vec::new();
    report.render(ReportFormat::Benchstat, &mut lines).unwrap();
    let lines = String::from_utf8(lines).unwrap();
    // 12 cases x 3 outer runs
    assert_eq!(lines.lines().count(), 36);
    assert!(lines.lines().all(|l| l.starts_with("BenchmarkEVM384") && l.ends_with(" ns/op")));

    let mut verbose = Vec::new();
    report.render(ReportFormat::Verbose, &mut verbose).unwrap();
    let verbose = String::from_utf8(verbose).unwrap();
    assert_eq!(verbose.matches("cycles/op:").count(), 12);
}

#[test]
fn test_other_modulus_names() {
    let config = BenchConfig::quick()
        .with_modulus(evm384_algorithms::Modulus::BLS12_377)
        .with_reference(false);
    let report = run_benchmarks(&config, SyntheticTicks::new(TICKS_PER_SECOND, 1.0).with_ticks_per_read(1))
        .unwrap();
    assert!(report.results().iter().all(|r| r.name.contains("BLS377")));
    assert_eq!(report.results().len(), 6);
}
