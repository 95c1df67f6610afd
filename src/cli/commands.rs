//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::{Path, PathBuf};

use miette::{NamedSource, Report};

use crate::backend::{CodegenConfig, compile_program};
use crate::format::{self, FormatConfig};
use crate::frontend::ast::Expr;
use crate::frontend::diagnostics::ParseError;
use crate::frontend::{lexer, parser};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// during compilation.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Extension of emitted IR files.
const IR_EXTENSION: &str = "ll";

/// Read a source file with size validation.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be accessed or read
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Render a parse error against its source text.
pub fn render_parse_error(file_path: &str, source: &str, error: ParseError) -> String {
    let report = Report::new(error).with_source_code(NamedSource::new(file_path, source.to_string()));
    format!("{report:?}")
}

/// Read and parse a file, turning a parse failure into a rendered CLI error.
fn parse_source_file(file_path: &str) -> CliResult<Expr> {
    let source = read_source(file_path)?;
    parser::parse(lexer::lex(&source)).map_err(|e| CliError::failure(render_parse_error(file_path, &source, e)))
}

fn pretty_ast(expr: &Expr) -> String {
    format::format_expr_with_config(expr, FormatConfig::new().with_multiline_blocks(true))
}

/// Default output path: the source path with the IR extension.
pub fn default_output_path(file_path: &str) -> PathBuf {
    Path::new(file_path).with_extension(IR_EXTENSION)
}

/// Tokenize and display the token tree.
pub fn lex_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source);
    print!("{}", format::format_tokens(&tokens));
    Ok(ExitCode::SUCCESS)
}

/// Parse and display the raw AST.
pub fn parse_file(file_path: &str) -> CliResult<ExitCode> {
    let ast = parse_source_file(file_path)?;
    println!("{:#?}", ast);
    Ok(ExitCode::SUCCESS)
}

/// Parse and display the AST in source form.
pub fn show_file(file_path: &str) -> CliResult<ExitCode> {
    let ast = parse_source_file(file_path)?;
    println!("{}", pretty_ast(&ast));
    Ok(ExitCode::SUCCESS)
}

/// Compile and print IR to stdout.
pub fn emit_ir(file_path: &str) -> CliResult<ExitCode> {
    let ast = parse_source_file(file_path)?;
    let ir = compile_program(&ast, &CodegenConfig::default())
        .map_err(|e| CliError::failure(format!("Code generation error: {}", e)))?;
    print!("{}", ir);
    Ok(ExitCode::SUCCESS)
}

/// Compile a file: print its AST and write the IR unit to `output` (or next to the source).
pub fn build_file(file_path: &str, output: Option<&str>, function_name: &str) -> CliResult<ExitCode> {
    let ast = parse_source_file(file_path)?;
    println!("{}", pretty_ast(&ast));

    let config = CodegenConfig::new().with_function_name(function_name);
    let ir = compile_program(&ast, &config).map_err(|e| CliError::failure(format!("Code generation error: {}", e)))?;

    let out_path = output.map(PathBuf::from).unwrap_or_else(|| default_output_path(file_path));
    fs::write(&out_path, ir)
        .map_err(|e| CliError::failure(format!("Error writing '{}': {}", out_path.display(), e)))?;

    tracing::info!(output = %out_path.display(), "wrote IR");
    println!("Wrote {}", out_path.display());
    Ok(ExitCode::SUCCESS)
}
