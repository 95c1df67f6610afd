//! pvc compiler frontend
//!
//! This module contains all frontend components:
//! - `lexer`: tokenization of source text into nested token sequences
//! - `parser`: lowest-precedence splitting of token sequences into an AST
//! - `ast`: expression tree definitions
//! - `diagnostics`: parse error reporting
//! - `types`: best-effort type resolution over the AST

// Syntax components are provided by the shared pvc_syntax crate.
pub use pvc_syntax::{ast, diagnostics, lexer, parser};

// Compiler-specific pieces remain local.
pub mod types;
