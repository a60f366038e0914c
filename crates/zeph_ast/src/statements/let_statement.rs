use serde::{Deserialize, Serialize};
use zeph_type::span::Span;

use crate::expressions::ASTExpression;

/// Left-hand side of a `let` assignment whose last index is the append marker `[]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "assign-type", rename_all = "kebab-case")]
pub enum ASTAssignTarget {
  /// `x[a][b][] = expr`
  ArrayIndexAppend {
    variable: String,
    #[serde(rename = "index-expr")]
    index_expr: Vec<ASTExpression>,
  },
  /// `x->y[a][b][] = expr`
  ObjectPropertyArrayIndexAppend {
    variable: String,
    property: String,
    #[serde(rename = "index-expr")]
    index_expr: Vec<ASTExpression>,
  },
  /// `Foo::y[a][b][] = expr`
  StaticPropertyArrayIndexAppend {
    #[serde(rename = "class-entry")]
    class_entry: String,
    property: String,
    #[serde(rename = "index-expr")]
    index_expr: Vec<ASTExpression>,
  },
}

impl ASTAssignTarget {
  pub fn index_expr(&self) -> &[ASTExpression] {
    match self {
      ASTAssignTarget::ArrayIndexAppend { index_expr, .. }
      | ASTAssignTarget::ObjectPropertyArrayIndexAppend { index_expr, .. }
      | ASTAssignTarget::StaticPropertyArrayIndexAppend { index_expr, .. } => index_expr,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ASTLetAssignment {
  pub target: ASTAssignTarget,
  pub expr: ASTExpression,
  #[serde(default)]
  pub span: Span,
}

impl ASTLetAssignment {
  pub fn new(
    target: ASTAssignTarget,
    expr: ASTExpression,
    span: Span,
  ) -> Self {
    Self { target, expr, span }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ASTLet {
  pub assignments: Vec<ASTLetAssignment>,
  #[serde(default)]
  pub span: Span,
}

impl ASTLet {
  pub fn new(
    assignments: Vec<ASTLetAssignment>,
    span: Span,
  ) -> Self {
    Self { assignments, span }
  }
}
