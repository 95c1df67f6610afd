//! Number scanning for the tokenizer
//!
//! A numeric literal is the maximal run of digits containing at most one `.`; a second `.` starts a new literal.

use super::Lexer;
use super::tokens::TokenKind;

impl<'a> Lexer<'a> {
    pub(super) fn scan_number(&mut self, start: usize, first: char) {
        let mut is_float = first == '.';

        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else if c == '.' && !is_float {
                is_float = true;
                self.advance();
            } else {
                break;
            }
        }

        let text = &self.source[start..self.current_pos];
        if is_float {
            // A lone `.` has no digits to parse; it reads as zero.
            let value = text.parse::<f32>().unwrap_or(0.0);
            self.add_token(TokenKind::Float(value), start);
        } else {
            self.add_token(TokenKind::Int(parse_int_wrapping(text)), start);
        }
    }
}

/// Decimal parse with two's-complement wraparound on overflow.
fn parse_int_wrapping(digits: &str) -> i32 {
    digits.bytes().fold(0i32, |acc, b| {
        acc.wrapping_mul(10).wrapping_add(i32::from(b - b'0'))
    })
}
