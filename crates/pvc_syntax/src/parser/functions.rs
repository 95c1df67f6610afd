/// Function literal parsing: `(params) => body`.
///
/// ## Notes
/// - The body is parsed before the parameter list is validated, so a broken body is reported first.
/// - A parameter is `name` or `name : type`, where the type tokens must parse to a single name.

fn function_literal(sequence: &TokenSequence, index: usize) -> Result<Expr, ParseError> {
    let (params, body) = sequence.split_around(index);
    let body = expression(&body)?;

    let group = match params.tokens() {
        [token] => token
            .as_parens()
            .ok_or_else(|| ParseError::malformed_params(ParamsProblem::NotAGroup, token.span))?,
        [] => return Err(ParseError::malformed_params(ParamsProblem::NotAGroup, params.span())),
        tokens => {
            return Err(ParseError::malformed_params(
                ParamsProblem::ExtraTokens { found: tokens.len() },
                params.span(),
            ));
        }
    };

    let args = group.args.iter().map(parameter).collect::<Result<Vec<_>, _>>()?;
    tracing::trace!(param_count = args.len(), "parsed function literal");
    Ok(Expr::func(args, body))
}

fn parameter(slice: &TokenSequence) -> Result<Param, ParseError> {
    let bad_parameter = || ParseError::malformed_params(ParamsProblem::BadParameter, slice.span());

    match slice.tokens() {
        [name] => match &name.kind {
            TokenKind::Name(name) => Ok(Param::untyped(name.clone())),
            _ => Err(bad_parameter()),
        },
        [name, colon, annotation @ ..] if !annotation.is_empty() => {
            let (TokenKind::Name(name), TokenKind::Colon) = (&name.kind, &colon.kind) else {
                return Err(bad_parameter());
            };
            let annotation = TokenSequence::from_tokens(annotation.to_vec(), colon.span);
            match expression(&annotation)? {
                Expr::Name(ty) => Ok(Param::typed(name.clone(), ty)),
                _ => Err(ParseError::malformed_params(
                    ParamsProblem::BadAnnotation,
                    annotation.span(),
                )),
            }
        }
        _ => Err(bad_parameter()),
    }
}
