//! Canonical language vocabulary for the `pv` language and the `pvc` compiler.
//!
//! This crate is intentionally small and dependency-free. It holds the registries that the lexer, parser, type
//! resolver and code generator must agree on:
//! - operator spellings and precedence ([`lang::operators`]),
//! - type-annotation names and their IR keywords ([`lang::types`]).
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no compiler-specific types.

pub mod lang;
