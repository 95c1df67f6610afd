#![forbid(unsafe_code)]
//! pvc: front end and minimal IR generator for the `pv` expression language
//!
//! The pipeline tokenizes source text into nested token sequences, parses them by lowest-precedence splitting,
//! resolves types on a best-effort basis, and lowers a single top-level function literal to textual IR.
//!
//! ```rust
//! use pvc::backend::{CodegenConfig, compile_program};
//! use pvc::parser;
//!
//! let expr = parser::parse_source("() => { 1 + 2 }").unwrap();
//! let ir = compile_program(&expr, &CodegenConfig::default()).unwrap();
//! assert!(ir.contains("%1 = add i32 1, 2"));
//! ```
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a compiler bug (logic error), use `.expect("INVARIANT: reason")` with a
//!   clear explanation.

pub mod backend;
pub mod cli;
pub mod format;
pub mod frontend;
pub mod version;

pub use frontend::ast;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;
pub use frontend::types;

pub use backend::{CodegenConfig, CodegenError, CompiledFunction, compile_function, compile_program};

pub use format::{FormatConfig, format_expr, format_source, format_tokens};
