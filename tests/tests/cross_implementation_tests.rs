//! Reference against platform-optimized engine, through the validation driver

use evm384_algorithms::{Modulus, Reference, Unrolled};
use evm384_params::utils::harness::VALIDATION_ITERATIONS;
use evm384_perf::{CrossValidator, ValidationConfig};

#[test]
fn test_reference_matches_unrolled() {
    for m in Modulus::ALL {
        for seed in [1, 2, 3] {
            let summary = CrossValidator::new(Reference, Unrolled, m, seed)
                .validate(100_000)
                .unwrap();
            assert_eq!(summary.comparisons, 300_000);
        }
    }
}

#[cfg(feature = "extern-oracle")]
#[test]
fn test_reference_matches_blst() {
    use evm384_algorithms::ExternOracle;
    let summary = CrossValidator::new(Reference, ExternOracle, Modulus::BLS12_381, 1)
        .validate(1_000_000)
        .unwrap();
    assert_eq!(summary.iterations, 1_000_000);
}

/// The full regression run; takes minutes in release mode
#[test]
#[ignore]
fn test_full_cross_validation_run() {
    let config = ValidationConfig::default();
    assert_eq!(config.iterations, VALIDATION_ITERATIONS);
    let summary = CrossValidator::new(Reference, evm384_perf::suite::oracle(), config.modulus, config.seed)
        .with_progress(config.progress_every)
        .validate(config.iterations)
        .unwrap();
    assert_eq!(summary.iterations, VALIDATION_ITERATIONS);
}
