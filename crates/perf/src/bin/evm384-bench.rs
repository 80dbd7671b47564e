use std::io::{self, Write};
use std::process::ExitCode;

use evm384_perf::cli::{parse_bench_args, Command, BENCH_USAGE};
use evm384_perf::logging::init_logging;
use evm384_perf::suite::run_benchmarks;
use evm384_perf::{HardwareTicks, PerfError};

fn main() -> ExitCode {
    init_logging();

    let config = match parse_bench_args(std::env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{BENCH_USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{BENCH_USAGE}");
            return ExitCode::from(err.exit_code());
        }
    };

    if config.skip_cycle_check {
        eprintln!("WARNING: skipping clock stability check; ns/op figures may be unreliable");
    }

    let result = run_benchmarks(&config, HardwareTicks).and_then(|report| {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        report.render(config.format, &mut out)?;
        out.flush()?;
        Ok(())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ PerfError::CalibrationUnstable { .. }) => {
            eprintln!("{err}");
            eprintln!("CPU frequency scaling appears active; rerun with -skip-cycle-check to proceed anyway");
            ExitCode::from(err.exit_code())
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
