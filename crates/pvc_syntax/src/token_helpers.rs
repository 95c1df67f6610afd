//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy to work with
//! ID-based operator tokens.

use crate::lexer::{BlockGroup, ParensGroup, Token, TokenKind};
use pvc_core::lang::operators::OperatorId;

impl TokenKind {
    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return the name spelling, if this is a name token.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            TokenKind::Name(name) => Some(name),
            _ => None,
        }
    }

    /// Return the parens group, if this is a `(...)` token.
    pub fn as_parens(&self) -> Option<&ParensGroup> {
        match self {
            TokenKind::Parens(group) => Some(group),
            _ => None,
        }
    }

    /// Return the block group, if this is a `{...}` token.
    pub fn as_block(&self) -> Option<&BlockGroup> {
        match self {
            TokenKind::Block(group) => Some(group),
            _ => None,
        }
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Convenience wrapper for `self.kind.as_parens()`.
    pub fn as_parens(&self) -> Option<&ParensGroup> {
        self.kind.as_parens()
    }
}
