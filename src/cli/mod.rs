//! CLI module for the pvc compiler
//!
//! This module provides the command-line interface for the compiler.
//!
//! ## Commands
//!
//! - `<file>` - Parse and print the canonical AST
//! - `build <file>` - Print the AST and write IR next to the source (or to `-o`)
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

use crate::backend::config::DEFAULT_FUNCTION_NAME;
use crate::version::PVC_VERSION;

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

/// Front end and IR generator for the pv expression language
#[derive(Parser, Debug)]
#[command(name = "pvc")]
#[command(version = PVC_VERSION)]
#[command(about = "Front end and IR generator for the pv expression language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to parse (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    // Debug/development flags
    /// Tokenize only and print the token tree (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,

    /// Parse only and print the raw AST (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "file")]
    pub parse_file: Option<PathBuf>,

    /// Print generated IR to stdout (debug)
    #[arg(long = "emit-ir", value_name = "FILE", conflicts_with = "file")]
    pub emit_ir_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile a source file to IR
    Build {
        /// Source file to compile
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Output file (default: the source path with an `.ll` extension)
        #[arg(short = 'o', long = "output", value_name = "OUT")]
        output: Option<PathBuf>,
        /// Name of the emitted function
        #[arg(long, default_value = DEFAULT_FUNCTION_NAME)]
        name: String,
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
    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file.to_string_lossy());
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file.to_string_lossy());
    }
    if let Some(file) = cli.emit_ir_file {
        return commands::emit_ir(&file.to_string_lossy());
    }

    match cli.command {
        Some(Command::Build { file, output, name }) => {
            let out = output.map(|p| p.to_string_lossy().to_string());
            commands::build_file(&file.to_string_lossy(), out.as_deref(), &name)
        }
        None => {
            // Default: parse the file and print its AST
            if let Some(file) = cli.file {
                commands::show_file(&file.to_string_lossy())
            } else {
                Err(CliError::failure("Usage: pvc <FILE> (see `pvc --help`)"))
            }
        }
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
    fn test_cli_parse_default_file() {
        let cli = Cli::try_parse_from(["pvc", "main.pv"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.file, Some(PathBuf::from("main.pv")));
    }

    #[test]
    fn test_cli_parse_build() {
        let cli = Cli::try_parse_from(["pvc", "build", "main.pv"]).unwrap();
        if let Some(Command::Build { file, output, name }) = cli.command {
            assert_eq!(file, PathBuf::from("main.pv"));
            assert!(output.is_none());
            assert_eq!(name, "main");
        } else {
            panic!("Expected Build command");
        }
    }

    #[test]
    fn test_cli_parse_build_with_options() {
        let cli = Cli::try_parse_from(["pvc", "build", "main.pv", "-o", "out.ll", "--name", "entry"]).unwrap();
        if let Some(Command::Build { output, name, .. }) = cli.command {
            assert_eq!(output, Some(PathBuf::from("out.ll")));
            assert_eq!(name, "entry");
        } else {
            panic!("Expected Build command");
        }
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["pvc", "--lex", "main.pv"]).unwrap();
        assert!(cli.lex_file.is_some());

        let cli = Cli::try_parse_from(["pvc", "--parse", "main.pv"]).unwrap();
        assert!(cli.parse_file.is_some());

        let cli = Cli::try_parse_from(["pvc", "--emit-ir", "main.pv"]).unwrap();
        assert!(cli.emit_ir_file.is_some());
    }

    #[test]
    fn test_debug_flag_conflicts_with_file() {
        assert!(Cli::try_parse_from(["pvc", "--lex", "a.pv", "b.pv"]).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let cli = Cli::try_parse_from(["pvc"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }
}
