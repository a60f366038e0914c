use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use zeph_type::span::Span;

#[derive(Debug, PartialEq, Clone, Hash, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralValue {
  Int(i64),
  UInt(u64),
  Long(i64),
  ULong(u64),
  Char(u8),
  Double(OrderedFloat<f64>),
  Bool(bool),
  String(String),
  Null,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ASTLiteral {
  pub value: LiteralValue,
  #[serde(default)]
  pub span: Span,
}

impl ASTLiteral {
  pub fn new(
    value: LiteralValue,
    span: Span,
  ) -> Self {
    Self { value, span }
  }
}
