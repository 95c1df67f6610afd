//! Abstract Syntax Tree definitions for the `pv` language.
//!
//! Every composite node exclusively owns its children (`Box`/`Vec`), so a tree has no sharing and no cycles and is
//! released bottom-up by `Drop`.

use pvc_core::lang::operators::OperatorId;

/// Source location span (byte offsets into the original source text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// Identifier spelling.
pub type Ident = String;

/// A function-literal parameter: `name` or `name: type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: Ident,
    /// Annotation name as written, `None` for an untyped parameter.
    pub ty: Option<Ident>,
}

impl Param {
    pub fn untyped(name: impl Into<Ident>) -> Self {
        Self {
            name: name.into(),
            ty: None,
        }
    }

    pub fn typed(name: impl Into<Ident>, ty: impl Into<Ident>) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty.into()),
        }
    }
}

/// Expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Int(i32),
    Float(f32),
    Name(Ident),
    /// Binary operation. `op` is never [`OperatorId::Arrow`]; arrows always build [`Expr::Func`].
    Operation {
        left: Box<Expr>,
        op: OperatorId,
        right: Box<Expr>,
    },
    Call {
        func: Box<Expr>,
        args: Vec<Expr>,
    },
    /// `{ a; b }` yields `b` (`returns = true`); `{ a; b; }` yields nothing.
    Block {
        stmts: Vec<Expr>,
        returns: bool,
    },
    /// `(params) => body`
    Func {
        args: Vec<Param>,
        body: Box<Expr>,
    },
}

impl Expr {
    pub fn name(name: impl Into<Ident>) -> Self {
        Expr::Name(name.into())
    }

    pub fn operation(left: Expr, op: OperatorId, right: Expr) -> Self {
        Expr::Operation {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn call(func: Expr, args: Vec<Expr>) -> Self {
        Expr::Call {
            func: Box::new(func),
            args,
        }
    }

    pub fn block(stmts: Vec<Expr>, returns: bool) -> Self {
        Expr::Block { stmts, returns }
    }

    pub fn func(args: Vec<Param>, body: Expr) -> Self {
        Expr::Func {
            args,
            body: Box::new(body),
        }
    }

    /// Short, stable name of the node kind (for diagnostics and logs).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Int(_) => "int",
            Expr::Float(_) => "float",
            Expr::Name(_) => "name",
            Expr::Operation { .. } => "operation",
            Expr::Call { .. } => "call",
            Expr::Block { .. } => "block",
            Expr::Func { .. } => "function",
        }
    }
}
