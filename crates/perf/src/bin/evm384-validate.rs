use std::process::ExitCode;

use evm384_algorithms::{ModArith384, Reference};
use evm384_perf::cli::{parse_validate_args, Command, VALIDATE_USAGE};
use evm384_perf::logging::init_logging;
use evm384_perf::suite::oracle;
use evm384_perf::CrossValidator;

fn main() -> ExitCode {
    init_logging();

    let config = match parse_validate_args(std::env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{VALIDATE_USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{VALIDATE_USAGE}");
            return ExitCode::from(err.exit_code());
        }
    };

    let oracle = oracle();
    println!(
        "Cross-validating {} against {} over {} for {} iterations (seed {})",
        Reference.name(),
        oracle.name(),
        config.modulus.long_name(),
        config.iterations,
        config.seed
    );

    let mut validator = CrossValidator::new(Reference, oracle, config.modulus, config.seed)
        .with_progress(config.progress_every);

    match validator.validate(config.iterations) {
        Ok(summary) => {
            println!(
                "OK: {} comparisons in {:.1} s",
                summary.comparisons,
                summary.elapsed.as_secs_f64()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ERROR - {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
