use serde::{Deserialize, Serialize};
use zeph_type::span::Span;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ASTVariableExpression {
  pub name: String,
  #[serde(default)]
  pub span: Span,
}

impl ASTVariableExpression {
  pub fn new(
    name: String,
    span: Span,
  ) -> Self {
    Self { name, span }
  }
}
