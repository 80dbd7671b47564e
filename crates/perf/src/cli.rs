//! Argument parsing for `evm384-bench` and `evm384-validate`

use evm384_algorithms::Modulus;

use crate::config::{BenchConfig, ValidationConfig};
use crate::error::{PerfError, Result};
use crate::report::ReportFormat;

pub const BENCH_USAGE: &str = "\
usage: evm384-bench [-skip-cycle-check] [--verbose | --benchstat]
                    [--format verbose|table|benchstat]
                    [--outer N] [--inner N] [--seed N]
                    [--modulus bls12-381|bls12-377] [--no-reference]
                    [-h | --help]";

pub const VALIDATE_USAGE: &str = "\
usage: evm384-validate [ITERATIONS] [--seed N] [--modulus bls12-381|bls12-377]";

/// What the process should do after parsing
#[derive(Debug, Clone)]
pub enum Command<T> {
    Run(T),
    Help,
}

fn value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| PerfError::Usage(format!("{flag} needs a value")))
}

fn number<T: std::str::FromStr>(text: &str, flag: &str) -> Result<T> {
    text.replace('_', "")
        .parse()
        .map_err(|_| PerfError::Usage(format!("{flag}: '{text}' is not a valid number")))
}

/// Parse `evm384-bench` arguments (without the program name)
pub fn parse_bench_args<I>(args: I) -> Result<Command<BenchConfig>>
where
    I: IntoIterator<Item = String>,
{
    let mut config = BenchConfig::fast();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-skip-cycle-check" | "--skip-cycle-check" => config.skip_cycle_check = true,
            "--verbose" | "-v" => config.format = ReportFormat::Verbose,
            "--benchstat" => config.format = ReportFormat::Benchstat,
            "--format" => config.format = value(&mut args, "--format")?.parse()?,
            "--outer" => config.outer_iterations = number(&value(&mut args, "--outer")?, "--outer")?,
            "--inner" => config.inner_iterations = number(&value(&mut args, "--inner")?, "--inner")?,
            "--seed" => config.seed = number(&value(&mut args, "--seed")?, "--seed")?,
            "--modulus" => config.modulus = Modulus::by_name(&value(&mut args, "--modulus")?)?,
            "--no-reference" => config.include_reference = false,
            "-h" | "--help" => return Ok(Command::Help),
            other => return Err(PerfError::Usage(format!("unexpected argument '{other}'"))),
        }
    }

    config.validate()?;
    Ok(Command::Run(config))
}

/// Parse `evm384-validate` arguments (without the program name)
pub fn parse_validate_args<I>(args: I) -> Result<Command<ValidationConfig>>
where
    I: IntoIterator<Item = String>,
{
    let mut config = ValidationConfig::default();
    let mut args = args.into_iter();
    let mut positional = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => config.seed = number(&value(&mut args, "--seed")?, "--seed")?,
            "--modulus" => config.modulus = Modulus::by_name(&value(&mut args, "--modulus")?)?,
            "-h" | "--help" => return Ok(Command::Help),
            other if !positional && !other.starts_with('-') => {
                config.iterations = number(other, "ITERATIONS")?;
                positional = true;
            }
            other => return Err(PerfError::Usage(format!("unexpected argument '{other}'"))),
        }
    }

    config.validate()?;
    Ok(Command::Run(config))
}
