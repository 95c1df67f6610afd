/// Binary operator splitting.
///
/// ## Notes
/// - Precedence comes from `pvc_core::lang::operators`.
/// - Ties go to the leftmost operator, so `a - b - c` parses as `a - (b - c)`.

/// Find the leftmost operator with the lowest precedence among the top-level tokens.
fn lowest_precedence_operator(tokens: &[Token]) -> Option<(usize, OperatorId)> {
    let mut lowest: Option<(usize, OperatorId, u8)> = None;

    for (index, token) in tokens.iter().enumerate() {
        let Some(id) = token.operator_id() else {
            continue;
        };
        let precedence = operators::precedence(id);
        let is_lower = match lowest {
            Some((_, _, best)) => precedence < best,
            None => true,
        };
        if is_lower {
            lowest = Some((index, id, precedence));
        }
    }

    lowest.map(|(index, id, _)| (index, id))
}

fn binary_operation(sequence: &TokenSequence, index: usize, op: OperatorId) -> Result<Expr, ParseError> {
    let (left, right) = sequence.split_around(index);
    let left = expression(&left)?;
    let right = expression(&right)?;
    Ok(Expr::operation(left, op, right))
}
