//! pvc source rendering
//!
//! This module turns compiler data back into text:
//! - expressions render in a canonical, fully parenthesized form that re-parses to the same tree
//! - token sequences render as an indented tree (used by `pvc --lex`)

mod config;
mod formatter;
mod writer;

pub use config::FormatConfig;
pub use formatter::Formatter;
pub use writer::FormatWriter;

use crate::frontend::ast::Expr;
use crate::frontend::lexer::TokenSequence;
use crate::frontend::parser;
use crate::frontend::diagnostics::ParseError;

/// Render an expression canonically on a single line
pub fn format_expr(expr: &Expr) -> String {
    format_expr_with_config(expr, FormatConfig::default())
}

/// Render an expression with custom configuration
pub fn format_expr_with_config(expr: &Expr, config: FormatConfig) -> String {
    Formatter::new(config).format_expr(expr)
}

/// Render a token tree
pub fn format_tokens(tokens: &TokenSequence) -> String {
    Formatter::new(FormatConfig::default()).format_tokens(tokens)
}

/// Parse source text and render it canonically
pub fn format_source(source: &str) -> Result<String, ParseError> {
    let expr = parser::parse_source(source)?;
    Ok(format_expr(&expr))
}
