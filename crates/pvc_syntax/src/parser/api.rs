/// Parse a token sequence into an [`Expr`], consuming it.
///
/// This is the main public entrypoint for parsing. The sequence and every token it owns are released when
/// parsing finishes, on success and on error alike.
///
/// ## Errors
/// Returns the first [`ParseError`] encountered.
#[tracing::instrument(skip_all, fields(token_count = sequence.len()))]
pub fn parse(sequence: TokenSequence) -> Result<Expr, ParseError> {
    expression(&sequence)
}

/// Parse a sequence the caller keeps owning (for example a slice of a group it still holds).
pub fn parse_ref(sequence: &TokenSequence) -> Result<Expr, ParseError> {
    expression(sequence)
}

/// Tokenize and parse a source string.
pub fn parse_source(source: &str) -> Result<Expr, ParseError> {
    parse(lexer::lex(source))
}
