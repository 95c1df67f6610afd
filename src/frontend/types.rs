//! Best-effort type resolution.
//!
//! Types are inferred bottom-up from the syntactic shape of an expression, without caching and without ever
//! rejecting input: whenever a type cannot be determined the answer is [`Type::Null`].
//!
//! ## Notes
//! - An operation takes the type of its **left** operand; the right operand is never consulted.
//! - A call only resolves when the callee is written inline as a function literal.
//! - Names resolve through a flat, caller-supplied [`Scope`].

use std::fmt;

use crate::frontend::ast::{Expr, Ident, Param};
use pvc_core::lang::types::{self as type_names, TypeNameId, VOID_IR_KEYWORD};

/// A resolved (or unresolved) value type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Type {
    /// Unknown, or no value.
    #[default]
    Null,
    I32,
    F32,
    /// Type of a function literal. The return type is never resolved and stays `Null`.
    Func {
        return_type: Box<Type>,
        arg_types: Vec<Type>,
    },
}

impl Type {
    /// Keyword for this type in IR text.
    ///
    /// Function types have no IR rendering and return `None`.
    pub fn ir_keyword(&self) -> Option<&'static str> {
        match self {
            Type::Null => Some(VOID_IR_KEYWORD),
            Type::I32 => Some(type_names::info_for(TypeNameId::I32).ir_keyword),
            Type::F32 => Some(type_names::info_for(TypeNameId::F32).ir_keyword),
            Type::Func { .. } => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Type::Null)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Null => write!(f, "null"),
            Type::I32 => write!(f, "{}", type_names::info_for(TypeNameId::I32).spelling),
            Type::F32 => write!(f, "{}", type_names::info_for(TypeNameId::F32).spelling),
            Type::Func {
                return_type,
                arg_types,
            } => {
                write!(f, "(")?;
                for (i, arg) in arg_types.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ") => {return_type}")
            }
        }
    }
}

/// Flat, ordered list of name/type bindings.
///
/// Lookup returns the first binding with a matching name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    bindings: Vec<(Ident, Type)>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scope from function parameters, typing each through its annotation.
    pub fn from_params(params: &[Param]) -> Self {
        params
            .iter()
            .fold(Scope::new(), |scope, param| scope.with_binding(param.name.clone(), param_type(param)))
    }

    /// Add a binding (builder style).
    pub fn with_binding(mut self, name: impl Into<Ident>, ty: Type) -> Self {
        self.bind(name, ty);
        self
    }

    pub fn bind(&mut self, name: impl Into<Ident>, ty: Type) {
        self.bindings.push((name.into(), ty));
    }

    pub fn lookup(&self, name: &str) -> Option<&Type> {
        self.bindings.iter().find(|(bound, _)| bound == name).map(|(_, ty)| ty)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Map a type-annotation name to a type. Unknown names map to `Null`.
pub fn parse_type(name: &str) -> Type {
    match type_names::from_str(name) {
        Some(TypeNameId::I32) => Type::I32,
        Some(TypeNameId::F32) => Type::F32,
        None => Type::Null,
    }
}

/// Type of a parameter from its annotation; untyped parameters are `Null`.
pub fn param_type(param: &Param) -> Type {
    param.ty.as_deref().map(parse_type).unwrap_or_default()
}

/// Infer the type of `expr` under `scope`.
pub fn infer_type(expr: &Expr, scope: &Scope) -> Type {
    match expr {
        Expr::Int(_) => Type::I32,
        Expr::Float(_) => Type::F32,
        Expr::Operation { left, .. } => infer_type(left, scope),
        Expr::Call { func, .. } => match func.as_ref() {
            Expr::Func { body, .. } => infer_type(body, scope),
            _ => Type::Null,
        },
        Expr::Func { args, .. } => Type::Func {
            return_type: Box::new(Type::Null),
            arg_types: args.iter().map(param_type).collect(),
        },
        Expr::Name(name) => scope.lookup(name).cloned().unwrap_or_default(),
        Expr::Block { stmts, returns } => match stmts.last() {
            Some(last) if *returns => infer_type(last, scope),
            _ => Type::Null,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::parser;

    fn infer_src(source: &str) -> Type {
        let expr = parser::parse_source(source).unwrap();
        infer_type(&expr, &Scope::new())
    }

    #[test]
    fn test_parse_type_known_names() {
        assert_eq!(parse_type("i32"), Type::I32);
        assert_eq!(parse_type("f32"), Type::F32);
        assert_eq!(parse_type("string"), Type::Null);
        assert_eq!(parse_type(""), Type::Null);
    }

    #[test]
    fn test_literals() {
        assert_eq!(infer_src("1"), Type::I32);
        assert_eq!(infer_src("1.5"), Type::F32);
    }

    #[test]
    fn test_operation_uses_left_operand_only() {
        assert_eq!(infer_src("1 + 2.0"), Type::I32);
        assert_eq!(infer_src("2.0 * 1"), Type::F32);
        assert_eq!(infer_src("x + 1"), Type::Null);
    }

    #[test]
    fn test_names_resolve_through_scope() {
        let scope = Scope::new().with_binding("x", Type::F32).with_binding("x", Type::I32);
        let expr = parser::parse_source("x").unwrap();
        assert_eq!(infer_type(&expr, &scope), Type::F32);

        let expr = parser::parse_source("y").unwrap();
        assert_eq!(infer_type(&expr, &scope), Type::Null);
    }

    #[test]
    fn test_block_value() {
        assert_eq!(infer_src("{ 1.0; 2 }"), Type::I32);
        assert_eq!(infer_src("{ 1; 2; }"), Type::Null);
        assert_eq!(infer_src("{}"), Type::Null);
    }

    #[test]
    fn test_function_literal_type() {
        let ty = infer_src("(a: i32, b: f32, c) => a");
        assert_eq!(
            ty,
            Type::Func {
                return_type: Box::new(Type::Null),
                arg_types: vec![Type::I32, Type::F32, Type::Null],
            }
        );
        assert_eq!(ty.to_string(), "(i32, f32, null) => null");
    }

    #[test]
    fn test_call_resolves_only_inline_functions() {
        assert_eq!(infer_src("((x) => 2.5)(1)"), Type::F32);
        assert_eq!(infer_src("f(1)"), Type::Null);
    }

    #[test]
    fn test_scope_from_params() {
        let scope = Scope::from_params(&[Param::typed("a", "i32"), Param::untyped("b")]);
        assert_eq!(scope.len(), 2);
        assert_eq!(scope.lookup("a"), Some(&Type::I32));
        assert_eq!(scope.lookup("b"), Some(&Type::Null));
        assert_eq!(scope.lookup("c"), None);
    }

    #[test]
    fn test_ir_keywords() {
        assert_eq!(Type::I32.ir_keyword(), Some("i32"));
        assert_eq!(Type::F32.ir_keyword(), Some("float"));
        assert_eq!(Type::Null.ir_keyword(), Some("void"));
        assert_eq!(infer_src("() => 1").ir_keyword(), None);
    }
}
