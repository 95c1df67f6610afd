//! Diagnostics for the syntax frontend.
//!
//! The parser is the only stage with a failure channel. Every failure is a [`ParseError`]: a kind tag plus the span
//! of the token sequence (or token) that could not be parsed. Errors implement [`miette::Diagnostic`] so the CLI can
//! render them against the source text.

use crate::ast::Span;
use thiserror::Error;

/// What went wrong while building an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("cannot parse an empty token sequence")]
    EmptyInput,

    #[error("malformed function parameter list: {0}")]
    MalformedParams(ParamsProblem),

    #[error("token sequence does not form an expression")]
    Unparseable,
}

/// Detail for [`ParseErrorKind::MalformedParams`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParamsProblem {
    #[error("expected a single parenthesized parameter list before `=>`, found {found} tokens")]
    ExtraTokens { found: usize },

    #[error("expected a parenthesized parameter list before `=>`")]
    NotAGroup,

    #[error("each parameter must be `name` or `name: type`")]
    BadParameter,

    #[error("a type annotation must be a single name")]
    BadAnnotation,
}

/// A parse failure with optional source position.
#[derive(Debug, Clone, PartialEq, Eq, Error, miette::Diagnostic)]
#[error("{kind}")]
#[diagnostic(code(pvc::parse))]
pub struct ParseError {
    pub kind: ParseErrorKind,
    #[label("while parsing this")]
    pub span: Option<Span>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span: Some(span) }
    }

    pub fn empty(span: Span) -> Self {
        Self::new(ParseErrorKind::EmptyInput, span)
    }

    pub fn malformed_params(problem: ParamsProblem, span: Span) -> Self {
        Self::new(ParseErrorKind::MalformedParams(problem), span)
    }

    pub fn unparseable(span: Span) -> Self {
        Self::new(ParseErrorKind::Unparseable, span)
    }

    /// Drop positional context (for comparisons that only care about the kind).
    pub fn without_span(mut self) -> Self {
        self.span = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ParseError::empty(Span::new(0, 0));
        assert_eq!(err.to_string(), "cannot parse an empty token sequence");

        let err = ParseError::malformed_params(ParamsProblem::ExtraTokens { found: 2 }, Span::new(0, 4));
        assert_eq!(
            err.to_string(),
            "malformed function parameter list: expected a single parenthesized parameter list before `=>`, found 2 tokens"
        );
    }

    #[test]
    fn test_span_is_optional() {
        let err = ParseError::unparseable(Span::new(3, 7)).without_span();
        assert_eq!(err.span, None);
        assert_eq!(err.kind, ParseErrorKind::Unparseable);
    }
}
