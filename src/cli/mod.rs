//! CLI module for sealant
//!
//! This module provides the command-line interface for the checkers.
//!
//! ## Commands
//!
//! - `check <file>...` - Check declaration and tuple files (default when a bare file is given)
//! - `reflect <file> [name]` - Print reflection info for declarations
//!
//! ## Modules
//!
//! - `commands` - Command implementations
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
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::config::CheckConfig;
use crate::version::SEALANT_VERSION;

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

/// Sealed-hierarchy and tuple type checker
#[derive(Parser, Debug)]
#[command(name = "sealant")]
#[command(version = SEALANT_VERSION)]
#[command(about = "Check sealed hierarchies and tuple types in .seal files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,

    /// Parse only (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "file")]
    pub parse_file: Option<PathBuf>,

    #[command(flatten)]
    pub options: CheckOptions,
}

/// Options shared by every command that runs the checkers.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct CheckOptions {
    /// Do not let `int` values satisfy `float` constraints
    #[arg(long = "no-numeric-widening", global = true)]
    pub no_numeric_widening: bool,

    /// Stop reporting after N errors
    #[arg(long = "max-errors", value_name = "N", global = true)]
    pub max_errors: Option<usize>,
}

impl CheckOptions {
    pub fn to_config(&self) -> CheckConfig {
        CheckConfig::new()
            .with_numeric_widening(!self.no_numeric_widening)
            .with_max_errors(self.max_errors)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check one or more .seal files
    Check {
        /// Files to check
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },

    /// Print reflection info for the declarations of a file
    Reflect {
        /// Source file
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Only this declaration
        #[arg(value_name = "NAME")]
        name: Option<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
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
    let config = cli.options.to_config();

    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file.to_string_lossy());
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file.to_string_lossy());
    }

    match cli.command {
        Some(Command::Check { files }) => {
            let paths: Vec<String> = files.iter().map(|f| f.to_string_lossy().to_string()).collect();
            commands::check_files(&paths, &config)
        }
        Some(Command::Reflect { file, name, json }) => {
            commands::reflect_file(&file.to_string_lossy(), name.as_deref(), json, &config)
        }
        None => {
            // Default: check the file if provided
            if let Some(file) = cli.file {
                commands::check_files(&[file.to_string_lossy().to_string()], &config)
            } else {
                Err(CliError::failure("No input file. Run `sealant --help` for usage."))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
