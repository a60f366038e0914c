//! Lowering of `let` assignments whose target ends in an append (`[]`).
//!
//! `target[i1]...[in][] = value` becomes one call to a runtime `*_multi`
//! primitive which walks the index chain, creating nested arrays as needed,
//! and appends `value` to the innermost one. Indexes are described to the
//! runtime by a key string (one character per index plus a trailing `a`)
//! followed by the index arguments themselves.
//!
//! The pipeline for one assignment:
//!
//! 1. validate the target container ([`validate::validate_target`]);
//! 2. resolve every index expression ([`classify::resolve_indexes`]);
//! 3. classify each index and build the keys ([`classify::classify_index`],
//!    [`keys::IndexKeys`]);
//! 4. box the assigned value into a runtime value ([`rhs::prepare_assigned_value`]);
//! 5. emit the call ([`emit::emit_call`]).
//!
//! A failing step rolls the context back, so a rejected assignment leaves no
//! code, temporaries or headers behind.

pub mod classify;
pub mod emit;
pub mod keys;
pub mod rhs;
pub mod target;
pub mod validate;

use zeph_ast::{ASTExpression, ASTLet, ASTLetAssignment};
use zeph_config::DebugTrace;
use zeph_diagnostics::message::DiagnosticMessage;
use zeph_log::trace_dbg;
use zeph_type::span::Span;

use crate::context::CompilationContext;
use crate::expr::ExpressionResolver;
use classify::{classify_index, resolve_indexes};
use emit::{GeneratedCall, emit_call};
use keys::IndexKeys;
use rhs::prepare_assigned_value;
use target::AppendTarget;
use validate::validate_target;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AppendStage {
  TargetValidated,
  IndicesResolved,
  IndicesClassified,
  RhsPrepared,
  Emitted,
}

pub fn compile_append(
  target: &AppendTarget<'_>,
  indexes: &[ASTExpression],
  value: &ASTExpression,
  span: &Span,
  resolver: &mut dyn ExpressionResolver,
  ctx: &mut CompilationContext,
) -> Result<GeneratedCall, DiagnosticMessage> {
  let checkpoint = ctx.checkpoint();

  let result = lower_append(target, indexes, value, span, resolver, ctx);
  if let Err(err) = &result {
    trace_dbg!(&ctx.config, DebugTrace::Codegen, "{} rejected: {}", target.function_name(), err);
    ctx.rollback(checkpoint);
  }

  result
}

fn lower_append(
  target: &AppendTarget<'_>,
  indexes: &[ASTExpression],
  value: &ASTExpression,
  span: &Span,
  resolver: &mut dyn ExpressionResolver,
  ctx: &mut CompilationContext,
) -> Result<GeneratedCall, DiagnosticMessage> {
  validate_target(target, span, ctx)?;
  trace_stage(ctx, target, AppendStage::TargetValidated);

  let resolved = resolve_indexes(indexes, span, resolver, ctx)?;
  trace_stage(ctx, target, AppendStage::IndicesResolved);

  let mut keys = IndexKeys::new();
  for index in &resolved {
    keys.push(classify_index(index, span, ctx)?);
  }
  trace_stage(ctx, target, AppendStage::IndicesClassified);

  let holder = prepare_assigned_value(value, resolver, ctx).map_err(|err| err.or_span(span))?;
  trace_stage(ctx, target, AppendStage::RhsPrepared);

  let call = GeneratedCall::new(target, holder, keys, ctx.config.codegen.zts);
  emit_call(&call, ctx);
  trace_stage(ctx, target, AppendStage::Emitted);

  Ok(call)
}

fn trace_stage(
  ctx: &CompilationContext,
  target: &AppendTarget<'_>,
  stage: AppendStage,
) {
  trace_dbg!(&ctx.config, DebugTrace::Codegen, "{}: {:?}", target.function_name(), stage);
}

pub fn compile_assignment(
  assignment: &ASTLetAssignment,
  resolver: &mut dyn ExpressionResolver,
  ctx: &mut CompilationContext,
) -> Result<GeneratedCall, DiagnosticMessage> {
  let (target, indexes) = AppendTarget::from_ast(&assignment.target);
  compile_append(&target, indexes, &assignment.expr, &assignment.span, resolver, ctx)
}

/// Compiles every assignment of `stmt` in order. The first failure discards
/// the whole statement.
pub fn compile_let(
  stmt: &ASTLet,
  resolver: &mut dyn ExpressionResolver,
  ctx: &mut CompilationContext,
) -> Result<Vec<GeneratedCall>, DiagnosticMessage> {
  let checkpoint = ctx.checkpoint();
  let mut calls = Vec::with_capacity(stmt.assignments.len());

  for assignment in &stmt.assignments {
    match compile_assignment(assignment, resolver, ctx) {
      Ok(call) => calls.push(call),
      Err(err) => {
        ctx.rollback(checkpoint);
        return Err(err);
      },
    }
  }

  Ok(calls)
}
