//! CLI module for the primecheck tool
//!
//! ## Commands
//!
//! - (no arguments) - Run the built-in verification table
//! - `verify [--json]` - Run the verification table, optionally as JSON
//! - `check <VALUE>` - Classify a single candidate value
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::process;

use clap::{Parser, Subcommand};

use crate::version::PRIMECHECK_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The primecheck primality verification tool
#[derive(Parser, Debug)]
#[command(name = "primecheck")]
#[command(version = PRIMECHECK_VERSION)]
#[command(about = "Deterministic primality checker with a justified verification table", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the built-in verification table (the default action)
    Verify {
        /// Emit the report as a JSON document instead of text
        #[arg(long)]
        json: bool,
    },

    /// Classify a single candidate value
    Check {
        /// Value to classify (integer or float)
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: String,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::Verify { json }) => commands::verify_table(json),
        Some(Command::Check { value }) => commands::check_value(&value),
        // Default: run the verification table with the text reporter.
        None => commands::verify_table(false),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args_defaults_to_verify() {
        let cli = Cli::try_parse_from(["primecheck"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_verify() {
        let cli = Cli::try_parse_from(["primecheck", "verify"]).unwrap();
        if let Some(Command::Verify { json }) = cli.command {
            assert!(!json);
        } else {
            panic!("Expected Verify command");
        }
    }

    #[test]
    fn test_cli_parse_verify_json() {
        let cli = Cli::try_parse_from(["primecheck", "verify", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Verify { json: true })));
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::try_parse_from(["primecheck", "check", "7919"]).unwrap();
        if let Some(Command::Check { value }) = cli.command {
            assert_eq!(value, "7919");
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_check_negative_value() {
        // A leading dash must still read as a value, not a flag.
        let cli = Cli::try_parse_from(["primecheck", "check", "-10"]).unwrap();
        if let Some(Command::Check { value }) = cli.command {
            assert_eq!(value, "-10");
        } else {
            panic!("Expected Check command");
        }
    }
}
