/// Parser core: the recursive entry shared by every grammar rule.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser`.
/// - Rules receive `&TokenSequence`. Slices owned by a parent group are parsed in place; sides produced by a split
///   are fresh copies that are dropped as soon as their subtree is built.
/// - The first error aborts the whole parse; there is no recovery.

/// Parse one token sequence into an expression.
fn expression(sequence: &TokenSequence) -> Result<Expr, ParseError> {
    let working = unwrap_grouping(sequence);
    if working.is_empty() {
        return Err(ParseError::empty(working.span()));
    }

    match lowest_precedence_operator(working.tokens()) {
        Some((index, OperatorId::Arrow)) => function_literal(working, index),
        Some((index, op)) => binary_operation(working, index, op),
        None => operand(working),
    }
}

/// A sequence that is exactly one `(...)` holding one slice stands for that slice.
fn unwrap_grouping(sequence: &TokenSequence) -> &TokenSequence {
    match sequence.tokens() {
        [token] => match token.as_parens() {
            Some(ParensGroup { args }) if args.len() == 1 => &args[0],
            _ => sequence,
        },
        _ => sequence,
    }
}
