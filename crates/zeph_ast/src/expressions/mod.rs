use serde::{Deserialize, Serialize};
use zeph_type::span::Span;

use crate::expressions::{array::ASTArray, literal::ASTLiteral, variable::ASTVariableExpression};

pub mod array;
pub mod literal;
pub mod variable;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ASTExpression {
  Literal(ASTLiteral),
  Variable(ASTVariableExpression),
  Array(ASTArray),
}

impl ASTExpression {
  pub fn span(&self) -> &Span {
    match self {
      ASTExpression::Literal(expr) => &expr.span,
      ASTExpression::Variable(expr) => &expr.span,
      ASTExpression::Array(expr) => &expr.span,
    }
  }
}
