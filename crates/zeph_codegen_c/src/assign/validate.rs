use zeph_diagnostics::message::DiagnosticMessage;
use zeph_type::span::Span;

use crate::assign::target::AppendTarget;
use crate::context::CompilationContext;

/// Checks the container variable before any index is touched.
pub fn validate_target(
  target: &AppendTarget<'_>,
  span: &Span,
  ctx: &CompilationContext,
) -> Result<(), DiagnosticMessage> {
  let Some(name) = target.target_variable() else {
    return Ok(());
  };

  let variable = ctx.get_variable(name, span)?;

  if !variable.is_readable() {
    return Err(DiagnosticMessage::UninitializedTargetVariable {
      name: variable.name,
      span: span.clone(),
    });
  }

  if !target.accepts(variable.ty) {
    return Err(DiagnosticMessage::InvalidTargetType {
      name: variable.name,
      ty: variable.ty,
      expected: target.expected_use(),
      span: span.clone(),
    });
  }

  Ok(())
}
