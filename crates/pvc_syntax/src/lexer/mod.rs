//! Tokenizer for the `pv` language
//!
//! Handles:
//! - Integer and float literals
//! - Names (ASCII alphanumerics and `_`)
//! - Operators (`+ - * / = =>`) and the annotation colon
//! - Bracketed groups: `(...)` split on commas, `{...}` split on semicolons, each slice tokenized recursively
//!
//! ## Notes
//! - Tokenizing never fails. Characters outside the vocabulary (including stray `)`, `}`, `,`, `;`) are skipped.
//! - Only the group's own bracket pair is depth-counted while locating its end: braces do not nest inside a paren
//!   scan and parens do not nest inside a brace scan.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, TokenSequence, ParensGroup, BlockGroup)
//! - `numbers` - Numeric literal scanning
//! - `groups` - Bracketed group splitting and recursion

mod groups;
mod numbers;
pub mod tokens;

pub use tokens::{BlockGroup, ParensGroup, Token, TokenKind, TokenSequence};

use crate::ast::Span;
use pvc_core::lang::operators::OperatorId;

// ============================================================================
// LEXER STATE
// ============================================================================

/// Tokenizer over one byte range of the source.
///
/// Nested groups are tokenized by child lexers over sub-ranges of the same source, so every span is an absolute
/// offset into the original text.
pub struct Lexer<'a> {
    source: &'a str,
    current_pos: usize,
    end: usize,
    tokens: TokenSequence,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer over the whole source.
    pub fn new(source: &'a str) -> Self {
        Self::with_range(source, 0, source.len())
    }

    /// Create a lexer over `source[start..end]`.
    fn with_range(source: &'a str, start: usize, end: usize) -> Self {
        Self {
            source,
            current_pos: start,
            end,
            tokens: TokenSequence::new(Span::new(start, end)),
        }
    }

    /// Tokenize the whole range into a flat sequence (groups nest inside their tokens).
    pub fn tokenize(mut self) -> TokenSequence {
        while !self.is_at_end() {
            self.scan_token();
        }
        self.tokens
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&self) -> bool {
        self.current_pos >= self.end
    }

    fn rest(&self) -> &'a str {
        &self.source[self.current_pos..self.end]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current_pos += c.len_utf8();
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
    }

    fn add_op(&mut self, id: OperatorId, start: usize) {
        self.add_token(TokenKind::Operator(id), start);
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            _ if is_space(c) => {}

            '0'..='9' | '.' => self.scan_number(start, c),

            '+' => self.add_op(OperatorId::Plus, start),
            '-' => self.add_op(OperatorId::Minus, start),
            '*' => self.add_op(OperatorId::Star, start),
            '/' => self.add_op(OperatorId::Slash, start),
            '=' => {
                if self.match_char('>') {
                    self.add_op(OperatorId::Arrow, start);
                } else {
                    self.add_op(OperatorId::Eq, start);
                }
            }
            ':' => self.add_token(TokenKind::Colon, start),

            '(' => self.scan_parens(start),
            '{' => self.scan_block(start),

            _ if is_name_char(c) => self.scan_name(start),

            _ => {
                tracing::trace!(offset = start, character = %c, "skipping unrecognized character");
            }
        }
    }

    // ========================================================================
    // Name scanning
    // ========================================================================

    fn scan_name(&mut self, start: usize) {
        while self.peek().is_some_and(is_name_char) {
            self.advance();
        }
        let spelling = &self.source[start..self.current_pos];
        self.add_token(TokenKind::Name(spelling.to_string()), start);
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Whitespace as the C locale defines it (includes vertical tab).
pub(crate) fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Check if a character can appear in a name (ASCII-only).
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Tokenize a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> TokenSequence {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
