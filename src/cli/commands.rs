//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use primecheck_core::{Candidate, is_prime};

use crate::harness::{self, ConsoleReporter, JsonReporter};

use super::{CliError, CliResult, ExitCode};

/// Run the built-in verification table and report each case.
///
/// The exit code reflects the summary: success when every case passed,
/// failure otherwise.
pub fn verify_table(json: bool) -> CliResult<ExitCode> {
    let summary = if json {
        let mut reporter = JsonReporter::stdout();
        harness::run_cases(harness::SEED_CASES, &mut reporter)
    } else {
        let mut reporter = ConsoleReporter::stdout();
        harness::run_cases(harness::SEED_CASES, &mut reporter)
    };

    if summary.all_passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        // The reporter already printed the per-case table and the summary line.
        Err(CliError::new("", ExitCode::FAILURE))
    }
}

/// Classify a single candidate value.
///
/// Prints the verdict and reflects it in the exit code (0 prime, 1 not prime),
/// so the command composes in shell pipelines.
pub fn check_value(raw: &str) -> CliResult<ExitCode> {
    let candidate: Candidate = raw
        .parse()
        .map_err(|e| CliError::failure(format!("Error: {}", e)))?;

    if is_prime(candidate) {
        println!("{} is prime.", candidate);
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{} is not prime.", candidate);
        Ok(ExitCode::FAILURE)
    }
}
