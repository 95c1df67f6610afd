//! Bracketed group scanning for the tokenizer
//!
//! `(...)` and `{...}` are tokenized eagerly: the interior is cut at top-level separators and every slice is
//! tokenized by a child lexer into its own [`TokenSequence`].

use super::tokens::{BlockGroup, ParensGroup, TokenKind, TokenSequence};
use super::{Lexer, is_space};

/// Bracket pair and separator for one group flavor.
#[derive(Debug, Clone, Copy)]
struct GroupDelims {
    open: u8,
    close: u8,
    separator: u8,
}

const PARENS: GroupDelims = GroupDelims {
    open: b'(',
    close: b')',
    separator: b',',
};

const BRACES: GroupDelims = GroupDelims {
    open: b'{',
    close: b'}',
    separator: b';',
};

/// Interior slices of a group and the offset just past its closing delimiter.
struct GroupLayout {
    slices: Vec<(usize, usize)>,
    resume_at: usize,
}

impl<'a> Lexer<'a> {
    /// Scan `(...)`; the opening paren at `start` has already been consumed.
    pub(super) fn scan_parens(&mut self, start: usize) {
        let layout = self.locate_group(PARENS);
        let args = self.tokenize_slices(&layout.slices);
        self.current_pos = layout.resume_at;
        self.add_token(TokenKind::Parens(ParensGroup { args }), start);
    }

    /// Scan `{...}`; the opening brace at `start` has already been consumed.
    pub(super) fn scan_block(&mut self, start: usize) {
        let layout = self.locate_group(BRACES);
        let mut stmts = self.tokenize_slices(&layout.slices);
        self.current_pos = layout.resume_at;

        // An empty slot after the last `;` means the block has no value.
        let mut returns = true;
        if stmts.last().is_some_and(TokenSequence::is_empty) {
            stmts.pop();
            returns = false;
        }

        self.add_token(TokenKind::Block(BlockGroup { stmts, returns }), start);
    }

    /// Find the matching close delimiter by depth counting and cut the interior at depth-1 separators.
    ///
    /// An unclosed group runs to the end of this lexer's range. A whitespace-only interior has no slices.
    fn locate_group(&self, delims: GroupDelims) -> GroupLayout {
        let bytes = self.source.as_bytes();
        let interior_start = self.current_pos;
        let mut interior_end = self.end;
        let mut resume_at = self.end;
        let mut depth = 1usize;
        let mut slice_start = interior_start;
        let mut slices = Vec::new();

        for i in interior_start..self.end {
            let b = bytes[i];
            if b == delims.open {
                depth += 1;
            } else if b == delims.close {
                depth -= 1;
                if depth == 0 {
                    interior_end = i;
                    resume_at = i + 1;
                    break;
                }
            } else if depth == 1 && b == delims.separator {
                slices.push((slice_start, i));
                slice_start = i + 1;
            }
        }

        if self.source[interior_start..interior_end].chars().all(is_space) {
            slices.clear();
        } else {
            slices.push((slice_start, interior_end));
        }

        GroupLayout { slices, resume_at }
    }

    fn tokenize_slices(&self, slices: &[(usize, usize)]) -> Vec<TokenSequence> {
        slices
            .iter()
            .map(|&(start, end)| Lexer::with_range(self.source, start, end).tokenize())
            .collect()
    }
}
