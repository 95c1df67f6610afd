//! pvc compiler backend
//!
//! This module handles code generation from the AST to textual, LLVM-style IR.
//!
//! The pipeline is:
//! 1. A top-level function literal from the frontend
//! 2. Header built from the parameter annotations and the inferred body type
//! 3. Post-order lowering of the body into SSA-style instructions
//!
//! ## Module Organization
//!
//! - `codegen` - Function lowering and IR emission
//! - `config` - Code generation options
//! - `errors` - Shapes the lowering rejects

pub mod codegen;
pub mod config;
pub mod errors;

pub use codegen::{CompiledFunction, compile_function, compile_function_with_config, compile_program};
pub use config::CodegenConfig;
pub use errors::CodegenError;
