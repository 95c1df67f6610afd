//! Token types for the `pv` tokenizer.
//!
//! Tokenization produces a *tree*: bracketed groups are tokenized eagerly into nested [`TokenSequence`]s, one per
//! comma-separated argument (`(...)`) or semicolon-separated statement (`{...}`).
//!
//! ## Notes
//! - Operator tokens carry stable ids from `pvc_core::lang::operators`.
//! - Groups own their nested sequences; `Clone` is a deep copy.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::ast::{Ident, Span};
use pvc_core::lang::operators::OperatorId;

/// Kind of token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Int(i32),
    Float(f32),
    Operator(OperatorId),
    Name(Ident),
    Colon,
    Parens(ParensGroup),
    Block(BlockGroup),
}

/// The comma-separated argument slices of a `(...)` group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParensGroup {
    pub args: Vec<TokenSequence>,
}

/// The semicolon-separated statement slices of a `{...}` group.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockGroup {
    pub stmts: Vec<TokenSequence>,
    /// `false` when the group ended with an empty statement slot (`{ a; }`).
    pub returns: bool,
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// An ordered, owned run of tokens from one character range.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenSequence {
    tokens: Vec<Token>,
    /// Range of source text this sequence was tokenized from (or covers, after a split).
    span: Span,
}

impl TokenSequence {
    /// Create an empty sequence covering `span`.
    pub fn new(span: Span) -> Self {
        Self {
            tokens: Vec::new(),
            span,
        }
    }

    /// Build a sequence from tokens; the span covers the first through last token.
    ///
    /// An empty token list yields an empty sequence positioned at `fallback`.
    pub fn from_tokens(tokens: Vec<Token>, fallback: Span) -> Self {
        let span = match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => first.span.merge(last.span),
            _ => fallback,
        };
        Self { tokens, span }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Split around the token at `index`, deep-copying both sides.
    ///
    /// Returns `(before, after)`; the token at `index` belongs to neither. Empty sides are positioned at the split
    /// token so diagnostics still point somewhere useful.
    pub fn split_around(&self, index: usize) -> (TokenSequence, TokenSequence) {
        let at = self.tokens[index].span;
        let before = TokenSequence::from_tokens(self.tokens[..index].to_vec(), Span::new(at.start, at.start));
        let after = TokenSequence::from_tokens(self.tokens[index + 1..].to_vec(), Span::new(at.end, at.end));
        (before, after)
    }

    /// Deep-copy every token except the last.
    pub fn without_last(&self) -> TokenSequence {
        let end = self.tokens.len().saturating_sub(1);
        let at = self.tokens.last().map(|t| t.span).unwrap_or(self.span);
        TokenSequence::from_tokens(self.tokens[..end].to_vec(), Span::new(at.start, at.start))
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
