/// Operator-free forms: leaves, calls, and blocks.

fn operand(sequence: &TokenSequence) -> Result<Expr, ParseError> {
    let tokens = sequence.tokens();

    if let [token] = tokens {
        match &token.kind {
            TokenKind::Int(value) => return Ok(Expr::Int(*value)),
            TokenKind::Float(value) => return Ok(Expr::Float(*value)),
            TokenKind::Name(name) => return Ok(Expr::Name(name.clone())),
            _ => {}
        }
    }

    if let Some(group) = tokens.last().and_then(Token::as_parens) {
        return call(sequence, group);
    }

    if let [token] = tokens {
        if let Some(group) = token.kind.as_block() {
            return block(group);
        }
    }

    Err(ParseError::unparseable(sequence.span()))
}

/// `callee(args...)`: the trailing group holds the arguments, everything before it is the callee.
fn call(sequence: &TokenSequence, group: &ParensGroup) -> Result<Expr, ParseError> {
    let args = group.args.iter().map(expression).collect::<Result<Vec<_>, _>>()?;
    let callee = sequence.without_last();
    let func = expression(&callee)?;
    Ok(Expr::call(func, args))
}

fn block(group: &BlockGroup) -> Result<Expr, ParseError> {
    let stmts = group.stmts.iter().map(expression).collect::<Result<Vec<_>, _>>()?;
    Ok(Expr::block(stmts, group.returns))
}
