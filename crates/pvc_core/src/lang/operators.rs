//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with the precedence the parser uses to pick the split point
//! of a token sequence.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact (no prefix matching).
//! - Precedence is a relative ordering where **lower binds looser**. The parser splits a sequence at the leftmost
//!   operator with the lowest precedence, so equal-precedence chains nest to the right.
//! - `=` is tokenized and ranked but carries no assignment semantics; it parses like any other binary operator.
//!
//! ## Examples
//! ```rust
//! use pvc_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("=>"), Some(OperatorId::Arrow));
//! assert!(operators::precedence(OperatorId::Plus) < operators::precedence(OperatorId::Star));
//! ```

use std::fmt;

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `=`
    Eq,
    /// `=>` (function literal)
    Arrow,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub precedence: u8,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Plus, "+", 1),
    op(OperatorId::Minus, "-", 1),
    op(OperatorId::Star, "*", 2),
    op(OperatorId::Slash, "/", 2),
    op(OperatorId::Eq, "=", 0),
    op(OperatorId::Arrow, "=>", 0),
];

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Precedence of `id`; lower values bind looser.
pub fn precedence(id: OperatorId) -> u8 {
    info_for(id).precedence
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

impl OperatorId {
    /// Canonical source spelling.
    pub fn as_str(self) -> &'static str {
        info_for(self).spelling
    }
}

impl fmt::Display for OperatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, spelling: &'static str, precedence: u8) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_spelling_round_trips() {
        for o in OPERATORS {
            assert_eq!(from_str(o.spelling), Some(o.id));
            assert_eq!(o.id.to_string(), o.spelling);
        }
    }

    #[test]
    fn test_precedence_table() {
        assert_eq!(precedence(OperatorId::Plus), 1);
        assert_eq!(precedence(OperatorId::Minus), 1);
        assert_eq!(precedence(OperatorId::Star), 2);
        assert_eq!(precedence(OperatorId::Slash), 2);
        assert_eq!(precedence(OperatorId::Eq), 0);
        assert_eq!(precedence(OperatorId::Arrow), 0);
    }

    #[test]
    fn test_unknown_spelling() {
        assert_eq!(from_str("**"), None);
        assert_eq!(from_str("->"), None);
    }
}
