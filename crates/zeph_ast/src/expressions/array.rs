use serde::{Deserialize, Serialize};
use zeph_type::span::Span;

use crate::expressions::ASTExpression;

/// Array literal, e.g. `[1, "two", x]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ASTArray {
  pub items: Vec<ASTExpression>,
  #[serde(default)]
  pub span: Span,
}

impl ASTArray {
  pub fn new(
    items: Vec<ASTExpression>,
    span: Span,
  ) -> Self {
    Self { items, span }
  }
}
