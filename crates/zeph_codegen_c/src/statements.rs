use zeph_ast::ASTStatement;
use zeph_diagnostics::message::DiagnosticMessage;
use zeph_log::{log_dbg, phase_log, phase_warn};

use crate::assign::compile_let;
use crate::context::CompilationContext;
use crate::expr::{ExpressionCompiler, ExpressionResolver};

/// Compiles `statements` in order with the default expression compiler.
///
/// A failing statement emits nothing; its diagnostic is collected and
/// compilation continues with the next one.
pub fn compile_statements(
  statements: &[ASTStatement],
  ctx: &mut CompilationContext,
) -> Vec<DiagnosticMessage> {
  compile_statements_with(statements, &mut ExpressionCompiler::new(), ctx)
}

pub fn compile_statements_with(
  statements: &[ASTStatement],
  resolver: &mut dyn ExpressionResolver,
  ctx: &mut CompilationContext,
) -> Vec<DiagnosticMessage> {
  phase_log!(&ctx.config, "Lowering {} statements", statements.len());

  let mut diagnostics = Vec::new();
  for stmt in statements {
    match stmt {
      ASTStatement::Let(let_stmt) => match compile_let(let_stmt, resolver, ctx) {
        Ok(calls) => log_dbg!(&ctx.config, "let at {}: {} calls", stmt.span(), calls.len()),
        Err(err) => diagnostics.push(err),
      },
    }
  }

  if !diagnostics.is_empty() {
    phase_warn!(&ctx.config, "{} statements rejected", diagnostics.len());
  }

  diagnostics
}
