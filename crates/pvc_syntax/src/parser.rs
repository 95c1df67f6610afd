//! Parser for the `pv` language
//!
//! Converts a tokenized [`TokenSequence`] into an [`Expr`] by *lowest-precedence splitting*: the leftmost operator
//! with the lowest precedence becomes the root, and both sides are parsed recursively. Sequences without an operator
//! must be a leaf, a call, or a block.
//!
//! ## Examples
//!
//! ```rust
//! use pvc_syntax::ast::Expr;
//! use pvc_syntax::parser;
//!
//! let expr = parser::parse_source("(x: i32) => x + 1").unwrap();
//! assert!(matches!(expr, Expr::Func { .. }));
//! ```

use crate::ast::*;
use crate::diagnostics::{ParamsProblem, ParseError};
use crate::lexer::{self, BlockGroup, ParensGroup, Token, TokenKind, TokenSequence};
use pvc_core::lang::operators::{self, OperatorId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// functions in the same Rust module (preserving privacy + call patterns) while keeping
// each grammar concern in its own file.

include!("parser/core.rs");
include!("parser/operators.rs");
include!("parser/functions.rs");
include!("parser/forms.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
