#![allow(dead_code)]

use std::sync::Arc;

use ordered_float::OrderedFloat;
use zeph_ast::expressions::array::ASTArray;
use zeph_ast::expressions::literal::{ASTLiteral, LiteralValue};
use zeph_ast::expressions::variable::ASTVariableExpression;
use zeph_ast::{ASTAssignTarget, ASTExpression, ASTLet, ASTLetAssignment, ASTStatement};
use zeph_codegen_c::{CompilationContext, compile_statements};
use zeph_config::{CodegenConfig, ZephConfig};
use zeph_diagnostics::message::DiagnosticMessage;
use zeph_type::span::Span;
use zeph_type::types::DataType;
use zeph_type::variable::{StorageKind, Variable};

/// Quiet config so test output stays clean.
pub fn config() -> ZephConfig {
  ZephConfig::new_basic(false, vec![], true, 0)
}

pub fn zts_config() -> ZephConfig {
  config().with_codegen(CodegenConfig {
    zts: true,
    extra_headers: vec![],
  })
}

/// Context whose locals are all declared and initialized.
pub fn context(locals: &[(&str, DataType)]) -> CompilationContext {
  context_with(config(), locals)
}

pub fn context_with(
  config: ZephConfig,
  locals: &[(&str, DataType)],
) -> CompilationContext {
  let mut ctx = CompilationContext::new(Arc::new(config));
  for (name, ty) in locals {
    let mut var = Variable::new(name.to_string(), *ty, StorageKind::Local, Span::default());
    var.initialized = true;
    ctx.symbols.declare(var);
  }
  ctx
}

pub fn declare_uninitialized(
  ctx: &mut CompilationContext,
  name: &str,
  ty: DataType,
) {
  ctx.symbols.declare(Variable::new(name.to_string(), ty, StorageKind::Local, Span::default()));
}

pub fn lit(value: LiteralValue) -> ASTExpression {
  ASTExpression::Literal(ASTLiteral::new(value, Span::default()))
}

pub fn int(v: i64) -> ASTExpression {
  lit(LiteralValue::Int(v))
}

pub fn string(s: &str) -> ASTExpression {
  lit(LiteralValue::String(s.to_string()))
}

pub fn double(v: f64) -> ASTExpression {
  lit(LiteralValue::Double(OrderedFloat(v)))
}

pub fn var(name: &str) -> ASTExpression {
  ASTExpression::Variable(ASTVariableExpression::new(name.to_string(), Span::default()))
}

pub fn array(items: Vec<ASTExpression>) -> ASTExpression {
  ASTExpression::Array(ASTArray::new(items, Span::default()))
}

pub fn property_target(
  variable: &str,
  property: &str,
  indexes: Vec<ASTExpression>,
) -> ASTAssignTarget {
  ASTAssignTarget::ObjectPropertyArrayIndexAppend {
    variable: variable.to_string(),
    property: property.to_string(),
    index_expr: indexes,
  }
}

pub fn let_stmt(
  target: ASTAssignTarget,
  value: ASTExpression,
) -> ASTStatement {
  ASTStatement::Let(ASTLet::new(
    vec![ASTLetAssignment::new(target, value, Span::default())],
    Span::default(),
  ))
}

/// Compiles `statements` and returns the emitted unit with its diagnostics.
pub fn compile(
  ctx: &mut CompilationContext,
  statements: &[ASTStatement],
) -> (String, Vec<DiagnosticMessage>) {
  let diagnostics = compile_statements(statements, ctx);
  (ctx.emit(), diagnostics)
}

/// Compiles statements that must all succeed.
pub fn compile_ok(
  ctx: &mut CompilationContext,
  statements: &[ASTStatement],
) -> String {
  let (code, diagnostics) = compile(ctx, statements);
  assert!(diagnostics.is_empty(), "unexpected diagnostics: {:?}", diagnostics);
  code
}

/// Compiles one statement that must fail and returns its diagnostic.
pub fn compile_err(
  ctx: &mut CompilationContext,
  statement: ASTStatement,
) -> DiagnosticMessage {
  let (_, mut diagnostics) = compile(ctx, &[statement]);
  assert_eq!(diagnostics.len(), 1, "expected one diagnostic, got {:?}", diagnostics);
  diagnostics.remove(0)
}
