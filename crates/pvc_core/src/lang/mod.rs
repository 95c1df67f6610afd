//! Registry-first vocabularies for the `pv` language.
//!
//! Each submodule exposes a stable id enum, a `const` table of metadata, and lookup helpers.
//! Enforcement of syntax rules still lives in the lexer/parser; these tables only describe the vocabulary.

pub mod operators;
pub mod types;
