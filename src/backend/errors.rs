//! Code generation errors.
//!
//! The lowering covers straight-line arithmetic over literals and typed parameters. Every other shape is reported
//! here instead of producing partial or invalid IR.

use thiserror::Error;

use crate::frontend::types::Type;
use pvc_core::lang::operators::OperatorId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    #[error("expected a function literal at the top level, found {found}")]
    NotAFunction { found: &'static str },

    #[error("invalid function name `{name}`")]
    InvalidFunctionName { name: String },

    #[error("parameter `{name}` needs a type annotation")]
    UntypedParameter { name: String },

    #[error("parameter `{name}` has unknown type `{ty}`")]
    UnknownParameterType { name: String, ty: String },

    #[error("unknown name `{name}`")]
    UnknownName { name: String },

    #[error("operator `{op}` cannot be lowered")]
    UnsupportedOperator { op: OperatorId },

    #[error("{kind} expressions cannot be lowered")]
    UnsupportedExpression { kind: &'static str },

    #[error("operand of `{op}` has no value")]
    MissingValue { op: OperatorId },

    #[error("type `{ty}` has no IR representation")]
    UnsupportedType { ty: Type },
}
