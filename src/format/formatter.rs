//! Canonical rendering of expressions and token trees
//!
//! The expression rendering is canonical: tokenizing and parsing it again yields the same tree for every
//! expression the parser can produce (operations are fully parenthesized, function literals are wrapped where an
//! operand or callee would otherwise absorb them).

use super::config::FormatConfig;
use super::writer::FormatWriter;
use crate::frontend::ast::{Expr, Param};
use crate::frontend::lexer::{Token, TokenKind, TokenSequence};

/// Renders expressions and token sequences as text
pub struct Formatter {
    writer: FormatWriter,
    config: FormatConfig,
}

impl Formatter {
    pub fn new(config: FormatConfig) -> Self {
        Self {
            writer: FormatWriter::new(config.indent_width),
            config,
        }
    }

    /// Render an expression.
    pub fn format_expr(mut self, expr: &Expr) -> String {
        self.expr(expr);
        self.writer.finish()
    }

    /// Render a token tree, one token per line, with group contents indented below the group.
    pub fn format_tokens(mut self, tokens: &TokenSequence) -> String {
        self.sequence(tokens);
        self.writer.finish()
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Int(value) => self.writer.write(&int_text(*value)),
            Expr::Float(value) => self.writer.write(&float_text(*value)),
            Expr::Name(name) => self.writer.write(name),
            Expr::Operation { left, op, right } => {
                self.writer.write("(");
                self.operand(left);
                self.writer.write(&format!(" {op} "));
                self.operand(right);
                self.writer.write(")");
            }
            Expr::Call { func, args } => {
                self.operand(func);
                self.writer.write("(");
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        self.writer.write(", ");
                    }
                    self.expr(arg);
                }
                self.writer.write(")");
            }
            Expr::Block { stmts, returns } => self.block(stmts, *returns),
            Expr::Func { args, body } => {
                self.writer.write("(");
                for (i, param) in args.iter().enumerate() {
                    if i > 0 {
                        self.writer.write(", ");
                    }
                    self.param(param);
                }
                self.writer.write(") => ");
                self.expr(body);
            }
        }
    }

    /// Operands and callees: a bare function literal would swallow whatever follows it.
    fn operand(&mut self, expr: &Expr) {
        if matches!(expr, Expr::Func { .. }) {
            self.writer.write("(");
            self.expr(expr);
            self.writer.write(")");
        } else {
            self.expr(expr);
        }
    }

    fn param(&mut self, param: &Param) {
        self.writer.write(&param.name);
        if let Some(ty) = &param.ty {
            self.writer.write(": ");
            self.writer.write(ty);
        }
    }

    fn block(&mut self, stmts: &[Expr], returns: bool) {
        if stmts.is_empty() {
            self.writer.write("{}");
            return;
        }

        if self.config.multiline_blocks {
            self.writer.writeln("{");
            self.writer.indent();
            for (i, stmt) in stmts.iter().enumerate() {
                self.expr(stmt);
                if i + 1 < stmts.len() || !returns {
                    self.writer.write(";");
                }
                self.writer.newline();
            }
            self.writer.dedent();
            self.writer.write("}");
        } else {
            self.writer.write("{");
            for (i, stmt) in stmts.iter().enumerate() {
                if i > 0 {
                    self.writer.write("; ");
                }
                self.expr(stmt);
            }
            if !returns {
                self.writer.write(";");
            }
            self.writer.write("}");
        }
    }

    // ========================================================================
    // Tokens
    // ========================================================================

    fn sequence(&mut self, tokens: &TokenSequence) {
        for token in tokens {
            self.token(token);
        }
    }

    fn token(&mut self, token: &Token) {
        let span = token.span;
        match &token.kind {
            TokenKind::Int(value) => self.writer.write(&format!("int {value}")),
            TokenKind::Float(value) => self.writer.write(&format!("float {}", float_text(*value))),
            TokenKind::Operator(op) => self.writer.write(&format!("operator {op}")),
            TokenKind::Name(name) => self.writer.write(&format!("name {name}")),
            TokenKind::Colon => self.writer.write("colon"),
            TokenKind::Parens(group) => {
                self.writer.writeln(&format!("parens @{}..{}", span.start, span.end));
                self.slices("arg", &group.args);
                return;
            }
            TokenKind::Block(group) => {
                self.writer
                    .writeln(&format!("block returns={} @{}..{}", group.returns, span.start, span.end));
                self.slices("stmt", &group.stmts);
                return;
            }
        }
        self.writer.writeln(&format!(" @{}..{}", span.start, span.end));
    }

    fn slices(&mut self, label: &str, slices: &[TokenSequence]) {
        self.writer.indent();
        for (i, slice) in slices.iter().enumerate() {
            let span = slice.span();
            self.writer.writeln(&format!("{label} {i} @{}..{}", span.start, span.end));
            self.writer.indent();
            self.sequence(slice);
            self.writer.dedent();
        }
        self.writer.dedent();
    }
}

/// Digits that tokenize back to `value`. Literals have no sign, so negative values are printed as the unsigned
/// digits that wrap around to them.
fn int_text(value: i32) -> String {
    (value as u32).to_string()
}

/// Smallest integer that rounds past `f32::MAX`; tokenizes back to positive infinity.
const F32_OVERFLOW_TEXT: &str = "340282366920938463463374607431768211456.0";

/// Decimal text for a float that always re-tokenizes as a float (never bare digits, never an exponent).
fn float_text(value: f32) -> String {
    if value == f32::INFINITY {
        return F32_OVERFLOW_TEXT.to_string();
    }
    let text = value.to_string();
    if text.contains('.') || !value.is_finite() {
        text
    } else {
        format!("{text}.0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::{lexer, parser};

    fn canonical(source: &str) -> String {
        let expr = parser::parse_source(source).unwrap();
        Formatter::new(FormatConfig::default()).format_expr(&expr)
    }

    #[test]
    fn test_operations_are_parenthesized() {
        assert_eq!(canonical("1 + 2 * 3"), "(1 + (2 * 3))");
        assert_eq!(canonical("1 - 2 - 3"), "(1 - (2 - 3))");
    }

    #[test]
    fn test_float_text() {
        assert_eq!(float_text(2.0), "2.0");
        assert_eq!(float_text(0.25), "0.25");
        assert_eq!(canonical(".5"), "0.5");
    }

    #[test]
    fn test_wrapped_int_round_trips() {
        assert_eq!(canonical("2147483648"), "2147483648");
        assert_eq!(int_text(-1), "4294967295");
        let expr = parser::parse_source(&canonical("2147483648")).unwrap();
        assert_eq!(expr, Expr::Int(i32::MIN));
    }

    #[test]
    fn test_infinite_float_round_trips() {
        let source = format!("{}.0", "9".repeat(50));
        let expr = parser::parse_source(&source).unwrap();
        assert_eq!(expr, Expr::Float(f32::INFINITY));

        let text = Formatter::new(FormatConfig::default()).format_expr(&expr);
        assert_eq!(text, F32_OVERFLOW_TEXT);
        assert_eq!(parser::parse_source(&text).unwrap(), Expr::Float(f32::INFINITY));
    }

    #[test]
    fn test_calls_and_blocks() {
        assert_eq!(canonical("f(1,2)"), "f(1, 2)");
        assert_eq!(canonical("{ a ; b }"), "{a; b}");
        assert_eq!(canonical("{ a ; b ; }"), "{a; b;}");
        assert_eq!(canonical("{ }"), "{}");
    }

    #[test]
    fn test_function_literals() {
        assert_eq!(canonical("(x: i32, y) => x+y"), "(x: i32, y) => (x + y)");
        assert_eq!(canonical("((x) => x)(1)"), "((x) => x)(1)");
    }

    #[test]
    fn test_multiline_blocks() {
        let expr = parser::parse_source("{ a; { b; c; } }").unwrap();
        let text = Formatter::new(FormatConfig::new().with_multiline_blocks(true)).format_expr(&expr);
        assert_eq!(text, "{\n  a;\n  {\n    b;\n    c;\n  }\n}");
    }

    #[test]
    fn test_token_tree() {
        let tokens = lexer::lex("f(1, x: i32)");
        let text = Formatter::new(FormatConfig::default()).format_tokens(&tokens);
        let expected = "\
name f @0..1
parens @1..12
  arg 0 @2..3
    int 1 @2..3
  arg 1 @4..11
    name x @5..6
    colon @6..7
    name i32 @8..11
";
        assert_eq!(text, expected);
    }
}
