//! CLI module for `discover-tests`
//!
//! ## Usage
//!
//! - `discover-tests [WORKDIR]` - Regenerate `Tests/LinuxMain.swift`
//! - `discover-tests --check [WORKDIR]` - Fail if `Tests/LinuxMain.swift` is stale
//! - `discover-tests --stdout [WORKDIR]` - Print the generated file instead of writing it
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

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::error::GenerateError;
use crate::version::GENERATOR_VERSION;
use commands::OutputMode;

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

impl From<GenerateError> for CliError {
    fn from(err: GenerateError) -> Self {
        CliError::failure(format!("Error: {}", err))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generates Tests/LinuxMain.swift from XCTest sources
#[derive(Parser, Debug)]
#[command(name = "discover-tests")]
#[command(version = GENERATOR_VERSION)]
#[command(
    about = "Generates Tests/LinuxMain.swift for platforms without XCTest discovery",
    long_about = None
)]
pub struct Cli {
    /// Root directory of the Swift package (default: current directory)
    #[arg(value_name = "WORKDIR")]
    pub workdir: Option<PathBuf>,

    /// Check that Tests/LinuxMain.swift is up to date without writing it
    #[arg(long, conflicts_with = "stdout")]
    pub check: bool,

    /// Print the generated file to stdout instead of writing it
    #[arg(long)]
    pub stdout: bool,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        if self.check {
            OutputMode::Check
        } else if self.stdout {
            OutputMode::Stdout
        } else {
            OutputMode::Write
        }
    }
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
    let mode = cli.output_mode();
    let workdir = match cli.workdir {
        Some(path) => path,
        None => env::current_dir()
            .map_err(|e| CliError::failure(format!("Error: cannot determine current directory: {}", e)))?,
    };

    commands::generate(&workdir, mode)
}

// ============================================================================
// Tests
// ============================================================================
