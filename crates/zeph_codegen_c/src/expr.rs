//! Typed compilation of the sub-expressions a statement needs.
//!
//! The lowering stages only depend on [`ExpressionResolver`]; the
//! [`ExpressionCompiler`] here covers literals, variable references and
//! array literals.

use zeph_ast::ASTExpression;
use zeph_ast::expressions::array::ASTArray;
use zeph_ast::expressions::literal::LiteralValue;
use zeph_config::DebugTrace;
use zeph_diagnostics::message::DiagnosticMessage;
use zeph_log::trace_dbg;
use zeph_type::span::Span;
use zeph_type::types::{DataType, ResolvedType};

use crate::context::CompilationContext;
use crate::literal::{escape_c_string, length_prefixed};

/// Result of compiling an expression.
///
/// For `ResolvedType::String`, `code` holds the escaped string contents
/// without quotes. For `ResolvedType::Variable` and `ResolvedType::Array` it
/// is the name of the symbol holding the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedValue {
  pub ty: ResolvedType,
  pub code: String,
  pub span: Span,
}

impl ResolvedValue {
  pub fn new(
    ty: ResolvedType,
    code: String,
    span: Span,
  ) -> Self {
    Self { ty, code, span }
  }
}

pub trait ExpressionResolver {
  fn compile(
    &mut self,
    expr: &ASTExpression,
    ctx: &mut CompilationContext,
  ) -> Result<ResolvedValue, DiagnosticMessage>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ExpressionCompiler;

impl ExpressionCompiler {
  pub fn new() -> Self {
    Self
  }

  fn compile_literal(
    value: &LiteralValue,
    span: &Span,
  ) -> ResolvedValue {
    let (ty, code) = match value {
      LiteralValue::Int(v) => (ResolvedType::Int, v.to_string()),
      LiteralValue::UInt(v) => (ResolvedType::UInt, v.to_string()),
      LiteralValue::Long(v) => (ResolvedType::Long, v.to_string()),
      LiteralValue::ULong(v) => (ResolvedType::ULong, v.to_string()),
      LiteralValue::Char(c) => (ResolvedType::Char, format!("'{}'", escape_char(*c))),
      LiteralValue::Double(v) => (ResolvedType::Double, format!("{:?}", v.into_inner())),
      LiteralValue::Bool(v) => (ResolvedType::Bool, if *v { "1" } else { "0" }.to_string()),
      LiteralValue::String(s) => (ResolvedType::String, escape_c_string(s)),
      LiteralValue::Null => (ResolvedType::Null, "null".to_string()),
    };

    ResolvedValue::new(ty, code, span.clone())
  }

  /// Builds the array into a fresh temporary and resolves to that temporary.
  fn compile_array(
    &mut self,
    array: &ASTArray,
    ctx: &mut CompilationContext,
  ) -> Result<ResolvedValue, DiagnosticMessage> {
    let holder = ctx.init_temp_variable(&array.span);
    ctx.printer.output(&format!("array_init_size({}, {});", holder, array.items.len()));

    for item in &array.items {
      let value = self.compile(item, ctx)?;
      let line = match value.ty {
        ResolvedType::Int
        | ResolvedType::UInt
        | ResolvedType::Long
        | ResolvedType::ULong
        | ResolvedType::Char
        | ResolvedType::UChar => format!("add_next_index_long({}, {});", holder, value.code),
        ResolvedType::Double => format!("add_next_index_double({}, {});", holder, value.code),
        ResolvedType::Bool => format!("add_next_index_bool({}, {});", holder, value.code),
        ResolvedType::String => {
          format!("add_next_index_stringl({}, {}, 1);", holder, length_prefixed(&value.code))
        },
        ResolvedType::Null => format!("add_next_index_null({});", holder),
        ResolvedType::Array => format!("zephir_array_fast_append({}, {});", holder, value.code),
        ResolvedType::Variable => {
          let variable = ctx.get_variable_for_read(&value.code, &value.span)?;
          match variable.ty {
            DataType::Int | DataType::UInt | DataType::Long | DataType::ULong | DataType::Char | DataType::UChar => {
              format!("add_next_index_long({}, {});", holder, variable.name)
            },
            DataType::Double => format!("add_next_index_double({}, {});", holder, variable.name),
            DataType::Bool => format!("add_next_index_bool({}, {});", holder, variable.name),
            DataType::Null => format!("add_next_index_null({});", holder),
            DataType::String | DataType::Array | DataType::Dynamic => {
              format!("zephir_array_fast_append({}, {});", holder, variable.name)
            },
          }
        },
      };
      ctx.printer.output(&line);
    }

    Ok(ResolvedValue::new(ResolvedType::Array, holder, array.span.clone()))
  }
}

impl ExpressionResolver for ExpressionCompiler {
  fn compile(
    &mut self,
    expr: &ASTExpression,
    ctx: &mut CompilationContext,
  ) -> Result<ResolvedValue, DiagnosticMessage> {
    let resolved = match expr {
      ASTExpression::Literal(lit) => Self::compile_literal(&lit.value, &lit.span),
      ASTExpression::Variable(var) => {
        let variable = ctx.get_variable_for_read(&var.name, &var.span)?;
        ResolvedValue::new(ResolvedType::Variable, variable.name, var.span.clone())
      },
      ASTExpression::Array(array) => self.compile_array(array, ctx)?,
    };

    trace_dbg!(&ctx.config, DebugTrace::Resolver, "{} -> {} `{}`", expr, resolved.ty, resolved.code);
    Ok(resolved)
  }
}

/// Body of a C character constant holding the single byte `c`.
fn escape_char(c: u8) -> String {
  match c {
    b'\'' => "\\'".to_string(),
    b'"' => "\"".to_string(),
    c if c.is_ascii() => escape_c_string(&(c as char).to_string()),
    c => format!("\\{:03o}", c),
  }
}
