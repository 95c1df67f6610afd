//! Lowering of a function literal to textual IR.
//!
//! The body is lowered post-order: operands first, then one instruction per arithmetic operation, each assigned
//! a fresh SSA temporary (`%1`, `%2`, ...) that is never reused within the function.
//!
//! ```text
//! define i32 @main(){
//!   %1 = add i32 1, 2
//!   ret i32 %1
//! }
//! ```
//!
//! ## Notes
//! - Only the left operand's type keyword is printed; both operands are assumed to share it.
//! - Division picks `udiv` when the left operand was written as an integer literal and `fdiv` otherwise. The choice
//!   follows the source form, not the inferred type.

use tracing::{debug, trace};

use super::config::CodegenConfig;
use super::errors::CodegenError;
use crate::format::FormatWriter;
use crate::frontend::ast::{Expr, Param};
use crate::frontend::types::{Scope, Type, infer_type, parse_type};
use pvc_core::lang::operators::OperatorId;

/// IR text for one compiled function.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompiledFunction {
    /// Module-level declarations. Nothing is declared yet, so this is always empty.
    pub declarations: String,
    /// The `define ... { ... }` body.
    pub implementation: String,
}

impl CompiledFunction {
    /// The compiled unit: declarations followed by the implementation.
    pub fn unit(&self) -> String {
        let mut unit = String::with_capacity(self.declarations.len() + self.implementation.len());
        unit.push_str(&self.declarations);
        unit.push_str(&self.implementation);
        unit
    }
}

/// A lowered value: how to refer to it, its type, and whether it was written as an integer literal.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Operand {
    pub value: String,
    pub ty: Type,
    pub from_int_literal: bool,
}

impl Operand {
    fn new(value: impl Into<String>, ty: Type, from_int_literal: bool) -> Self {
        Self {
            value: value.into(),
            ty,
            from_int_literal,
        }
    }

    /// Result of something that yields no value (a non-returning block).
    fn void() -> Self {
        Self::new(String::new(), Type::Null, false)
    }
}

/// Hands out sequential temporary names, starting at `%1`.
#[derive(Debug)]
pub(crate) struct TempCounter {
    next: u32,
}

impl Default for TempCounter {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl TempCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fresh(&mut self) -> String {
        let name = format!("%{}", self.next);
        self.next += 1;
        name
    }

    /// Number of temporaries handed out so far.
    pub fn allocated(&self) -> u32 {
        self.next - 1
    }
}

/// Lowers the expressions of one function body, appending instructions as it goes.
pub(crate) struct FunctionLowering {
    writer: FormatWriter,
    temps: TempCounter,
    scope: Scope,
}

impl FunctionLowering {
    pub fn new(scope: Scope, indent_width: usize) -> Self {
        Self {
            writer: FormatWriter::new(indent_width),
            temps: TempCounter::new(),
            scope,
        }
    }

    /// Lower `expr`, emitting instructions for every operation it contains.
    pub fn compile_expr(&mut self, expr: &Expr) -> Result<Operand, CodegenError> {
        match expr {
            Expr::Int(value) => Ok(Operand::new(value.to_string(), Type::I32, true)),
            Expr::Float(value) => Ok(Operand::new(float_literal(*value), Type::F32, false)),
            Expr::Name(name) => {
                let ty = self
                    .scope
                    .lookup(name)
                    .cloned()
                    .ok_or_else(|| CodegenError::UnknownName { name: name.clone() })?;
                Ok(Operand::new(format!("%{name}"), ty, false))
            }
            Expr::Operation { left, op, right } => self.operation(left, *op, right),
            Expr::Block { stmts, returns } => {
                let mut last = Operand::void();
                for stmt in stmts {
                    last = self.compile_expr(stmt)?;
                }
                Ok(if *returns { last } else { Operand::void() })
            }
            Expr::Call { .. } | Expr::Func { .. } => Err(CodegenError::UnsupportedExpression {
                kind: expr.kind_name(),
            }),
        }
    }

    fn operation(&mut self, left: &Expr, op: OperatorId, right: &Expr) -> Result<Operand, CodegenError> {
        let lhs = self.compile_expr(left)?;
        let rhs = self.compile_expr(right)?;
        let opcode = opcode(op, lhs.from_int_literal)?;

        if lhs.ty.is_null() || rhs.ty.is_null() {
            return Err(CodegenError::MissingValue { op });
        }
        let keyword = ir_keyword(&lhs.ty)?;

        let temp = self.temps.fresh();
        self.writer
            .writeln(&format!("{temp} = {opcode} {keyword} {}, {}", lhs.value, rhs.value));
        trace!(%temp, opcode, "emitted instruction");

        Ok(Operand::new(temp, lhs.ty, false))
    }

    /// Number of temporaries allocated so far.
    pub fn temps_allocated(&self) -> u32 {
        self.temps.allocated()
    }
}

fn opcode(op: OperatorId, left_is_int_literal: bool) -> Result<&'static str, CodegenError> {
    match op {
        OperatorId::Plus => Ok("add"),
        OperatorId::Minus => Ok("sub"),
        OperatorId::Star => Ok("mul"),
        OperatorId::Slash if left_is_int_literal => Ok("udiv"),
        OperatorId::Slash => Ok("fdiv"),
        OperatorId::Eq | OperatorId::Arrow => Err(CodegenError::UnsupportedOperator { op }),
    }
}

fn ir_keyword(ty: &Type) -> Result<&'static str, CodegenError> {
    ty.ir_keyword()
        .ok_or_else(|| CodegenError::UnsupportedType { ty: ty.clone() })
}

/// Float constant text. The widened value prints exactly, which IR float constants require.
///
/// Infinities and NaNs have no decimal spelling in IR; they use the hex form of the widened double.
fn float_literal(value: f32) -> String {
    let wide = f64::from(value);
    if !wide.is_finite() {
        return format!("0x{:016X}", wide.to_bits());
    }
    let text = wide.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

/// `<type> %<name>` for one parameter of the header.
fn param_decl(param: &Param) -> Result<String, CodegenError> {
    let Some(annotation) = param.ty.as_deref() else {
        return Err(CodegenError::UntypedParameter {
            name: param.name.clone(),
        });
    };

    let ty = parse_type(annotation);
    if ty.is_null() {
        return Err(CodegenError::UnknownParameterType {
            name: param.name.clone(),
            ty: annotation.to_string(),
        });
    }
    Ok(format!("{} %{}", ir_keyword(&ty)?, param.name))
}

/// Global symbol names: `[-a-zA-Z$._][-a-zA-Z$._0-9]*`.
fn validate_function_name(name: &str) -> Result<(), CodegenError> {
    let is_name_char = |c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '$' | '.' | '_');
    let valid = match name.chars().next() {
        Some(first) => !first.is_ascii_digit() && name.chars().all(is_name_char),
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(CodegenError::InvalidFunctionName { name: name.to_string() })
    }
}

/// Compile a function literal into a function named `name`, with default settings.
pub fn compile_function(func: &Expr, name: &str) -> Result<CompiledFunction, CodegenError> {
    compile_function_with_config(func, &CodegenConfig::default().with_function_name(name))
}

/// Compile a function literal using `config` for the symbol name and layout.
///
/// ## Errors
/// Returns a [`CodegenError`] when `func` is not a function literal or its body contains a shape the lowering does
/// not support.
#[tracing::instrument(skip_all, fields(name = %config.function_name))]
pub fn compile_function_with_config(func: &Expr, config: &CodegenConfig) -> Result<CompiledFunction, CodegenError> {
    let Expr::Func { args, body } = func else {
        return Err(CodegenError::NotAFunction {
            found: func.kind_name(),
        });
    };
    validate_function_name(&config.function_name)?;

    let params = args.iter().map(param_decl).collect::<Result<Vec<_>, _>>()?;
    let scope = Scope::from_params(args);
    let return_type = infer_type(body, &scope);
    let return_keyword = ir_keyword(&return_type)?;

    let mut lowering = FunctionLowering::new(scope, config.indent_width);
    lowering.writer.writeln(&format!(
        "define {return_keyword} @{}({}){{",
        config.function_name,
        params.join(", ")
    ));
    lowering.writer.indent();

    let result = lowering.compile_expr(body)?;
    if return_type.is_null() {
        lowering.writer.writeln("ret void");
    } else {
        lowering.writer.writeln(&format!("ret {return_keyword} {}", result.value));
    }

    lowering.writer.dedent();
    lowering.writer.writeln("}");

    debug!(temps = lowering.temps_allocated(), params = args.len(), "compiled function");
    Ok(CompiledFunction {
        declarations: String::new(),
        implementation: lowering.writer.finish(),
    })
}

/// Compile a whole program (a single top-level function literal) into an IR unit.
pub fn compile_program(expr: &Expr, config: &CodegenConfig) -> Result<String, CodegenError> {
    compile_function_with_config(expr, config).map(|compiled| compiled.unit())
}
