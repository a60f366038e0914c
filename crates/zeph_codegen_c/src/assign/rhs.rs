use zeph_ast::ASTExpression;
use zeph_diagnostics::message::DiagnosticMessage;
use zeph_log::log_trc;
use zeph_type::types::{DataType, ResolvedType};

use crate::context::CompilationContext;
use crate::expr::{ExpressionResolver, ResolvedValue};

/// Compiles the assigned value and returns the name of a runtime value holding it.
///
/// Scalars are boxed into a fresh temporary; arrays and refcounted variables
/// are passed as they are.
pub fn prepare_assigned_value(
  expr: &ASTExpression,
  resolver: &mut dyn ExpressionResolver,
  ctx: &mut CompilationContext,
) -> Result<String, DiagnosticMessage> {
  let value = resolver.compile(expr, ctx)?;
  box_value(&value, ctx)
}

fn box_value(
  value: &ResolvedValue,
  ctx: &mut CompilationContext,
) -> Result<String, DiagnosticMessage> {
  let (macro_name, source) = match value.ty {
    ResolvedType::Array => return Ok(value.code.clone()),
    ResolvedType::Variable => {
      let variable = ctx.get_variable_for_read(&value.code, &value.span)?;
      match variable.ty {
        DataType::String | DataType::Array | DataType::Dynamic => return Ok(variable.name),
        DataType::Int | DataType::UInt | DataType::Long | DataType::ULong | DataType::Char | DataType::UChar => {
          ("ZVAL_LONG", Some(variable.name))
        },
        DataType::Double => ("ZVAL_DOUBLE", Some(variable.name)),
        DataType::Bool => ("ZVAL_BOOL", Some(variable.name)),
        DataType::Null => ("ZVAL_NULL", None),
      }
    },
    ResolvedType::Int
    | ResolvedType::UInt
    | ResolvedType::Long
    | ResolvedType::ULong
    | ResolvedType::Char
    | ResolvedType::UChar => ("ZVAL_LONG", Some(value.code.clone())),
    ResolvedType::Double => ("ZVAL_DOUBLE", Some(value.code.clone())),
    ResolvedType::Bool => ("ZVAL_BOOL", Some(value.code.clone())),
    ResolvedType::Null => ("ZVAL_NULL", None),
    ResolvedType::String => {
      let holder = ctx.init_temp_variable(&value.span);
      ctx.printer.output(&format!("ZVAL_STRING({}, \"{}\", 1);", holder, value.code));
      return Ok(holder);
    },
  };

  let holder = ctx.init_temp_variable(&value.span);
  log_trc!(&ctx.config, "boxing {} value into {}", value.ty, holder);
  match source {
    Some(source) => ctx.printer.output(&format!("{}({}, {});", macro_name, holder, source)),
    None => ctx.printer.output(&format!("{}({});", macro_name, holder)),
  }

  Ok(holder)
}
