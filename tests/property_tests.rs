//! Property-based tests for the pvc compiler
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;

use pvc::ast::Expr;
use pvc::format::format_expr;
use pvc::frontend::{lexer, parser};
use pvc_core::lang::operators::OperatorId;

// =============================================================================
// Strategies
// =============================================================================

fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,6}"
}

/// Operators that build `Operation` nodes (the arrow always builds a function literal).
fn binary_op_strategy() -> impl Strategy<Value = OperatorId> {
    prop_oneof![
        Just(OperatorId::Plus),
        Just(OperatorId::Minus),
        Just(OperatorId::Star),
        Just(OperatorId::Slash),
        Just(OperatorId::Eq),
    ]
}

/// Leaves. Negative ints come from literals that wrap past `i32::MAX`; floats stay non-negative.
fn leaf_strategy() -> impl Strategy<Value = Expr> {
    prop_oneof![
        any::<i32>().prop_map(Expr::Int),
        // Multiples of 1/8 print exactly.
        (0u32..100_000).prop_map(|n| Expr::Float(n as f32 / 8.0)),
        Just(Expr::Float(f32::INFINITY)),
        ident_strategy().prop_map(Expr::Name),
        Just(Expr::block(vec![], true)),
    ]
}

/// ASTs built from ints, floats, names, operations, calls and blocks.
fn expr_strategy() -> impl Strategy<Value = Expr> {
    leaf_strategy().prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            (inner.clone(), binary_op_strategy(), inner.clone())
                .prop_map(|(left, op, right)| Expr::operation(left, op, right)),
            (inner.clone(), prop::collection::vec(inner.clone(), 0..4))
                .prop_map(|(func, args)| Expr::call(func, args)),
            (prop::collection::vec(inner, 1..4), any::<bool>())
                .prop_map(|(stmts, returns)| Expr::block(stmts, returns)),
        ]
    })
}

// =============================================================================
// Round-trip Properties
// =============================================================================

proptest! {
    /// Property: re-tokenizing and re-parsing the canonical rendering reproduces the tree
    #[test]
    fn canonical_rendering_reparses_to_same_tree(expr in expr_strategy()) {
        let text = format_expr(&expr);
        let reparsed = parser::parse(lexer::lex(&text));
        prop_assert!(reparsed.is_ok(), "failed to re-parse {:?}: {:?}", text, reparsed);
        prop_assert_eq!(reparsed.unwrap(), expr);
    }

    /// Property: rendering is stable across a parse round-trip
    #[test]
    fn canonical_rendering_is_idempotent(expr in expr_strategy()) {
        let first = format_expr(&expr);
        let reparsed = parser::parse_source(&first).expect("canonical text should parse");
        prop_assert_eq!(format_expr(&reparsed), first);
    }

    /// Property: tokenizing never fails and parsing never panics, whatever the input
    #[test]
    fn arbitrary_input_never_panics(source in "\\PC{0,64}") {
        let tokens = lexer::lex(&source);
        let _ = parser::parse(tokens);
    }

    /// Property: names survive tokenizing unchanged
    #[test]
    fn identifiers_survive_lexing(ident in ident_strategy()) {
        let source = format!("x = {}", ident);
        let tokens = lexer::lex(&source);
        prop_assert_eq!(tokens.len(), 3);
        prop_assert_eq!(tokens.tokens()[2].kind.as_name(), Some(ident.as_str()));
    }
}
