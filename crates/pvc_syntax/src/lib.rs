//! Shared syntax frontend for the `pv` language: tokenizer, AST, parser, diagnostics.
//!
//! ## Notes
//! - This crate is “syntax-only”: it does not do type inference or IR lowering.
//! - Operator identity and precedence come from `pvc_core::lang::operators`.
//! - The tokenizer never fails; the parser stops at the first error.
//!
//! ## Examples
//! ```rust
//! use pvc_syntax::ast::Expr;
//! use pvc_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("f(1, 2)");
//! let expr = parser::parse(tokens).unwrap();
//! assert!(matches!(expr, Expr::Call { .. }));
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
