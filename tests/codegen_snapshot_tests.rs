//! Golden snapshot tests for codegen
//!
//! These tests generate IR from `.pv` input files and compare
//! the output against stored snapshots. This ensures codegen changes are
//! reviewed and intentional.
//!
//! Run with: `cargo test --test codegen_snapshot_tests`
//! Review changes: `cargo insta review`

use pvc::backend::{CodegenConfig, compile_program};
use pvc::frontend::{lexer, parser};
use std::fs;

/// Generate IR from pv source
fn generate_ir(source: &str) -> String {
    let ast = parser::parse(lexer::lex(source)).expect("parser failed");
    compile_program(&ast, &CodegenConfig::default()).expect("codegen failed")
}

/// Load a test file from the codegen_snapshots directory
fn load_test_file(name: &str) -> String {
    let path = format!("tests/codegen_snapshots/{}.pv", name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read test file: {}", path))
}

#[test]
fn test_block_add_codegen() {
    let source = load_test_file("block_add");
    let ir = generate_ir(&source);
    insta::assert_snapshot!("block_add", ir);
}

#[test]
fn test_params_codegen() {
    let source = load_test_file("params");
    let ir = generate_ir(&source);
    insta::assert_snapshot!("params", ir);
}

#[test]
fn test_division_codegen() {
    let source = load_test_file("division");
    let ir = generate_ir(&source);
    insta::assert_snapshot!("division", ir);
}

#[test]
fn test_float_math_codegen() {
    let source = load_test_file("float_math");
    let ir = generate_ir(&source);
    insta::assert_snapshot!("float_math", ir);
}

#[test]
fn test_void_block_codegen() {
    let source = load_test_file("void_block");
    let ir = generate_ir(&source);
    insta::assert_snapshot!("void_block", ir);
}
