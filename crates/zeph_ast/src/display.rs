//! Source-like rendering of expressions and assignment targets, used to name
//! the offending node in diagnostics.

use std::fmt::{self, Display};

use crate::expressions::{ASTExpression, literal::LiteralValue};
use crate::statements::ASTAssignTarget;

impl Display for LiteralValue {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      LiteralValue::Int(v) | LiteralValue::Long(v) => write!(f, "{}", v),
      LiteralValue::UInt(v) | LiteralValue::ULong(v) => write!(f, "{}", v),
      LiteralValue::Char(c) => write!(f, "'{}'", (*c as char).escape_default()),
      LiteralValue::Double(v) => write!(f, "{:?}", v.into_inner()),
      LiteralValue::Bool(v) => write!(f, "{}", v),
      LiteralValue::String(s) => write!(f, "\"{}\"", s.escape_default()),
      LiteralValue::Null => write!(f, "null"),
    }
  }
}

impl Display for ASTExpression {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      ASTExpression::Literal(lit) => write!(f, "{}", lit.value),
      ASTExpression::Variable(var) => write!(f, "{}", var.name),
      ASTExpression::Array(array) => {
        write!(f, "[")?;
        for (i, item) in array.items.iter().enumerate() {
          if i > 0 {
            write!(f, ", ")?;
          }
          write!(f, "{}", item)?;
        }
        write!(f, "]")
      },
    }
  }
}

fn write_indexes(
  f: &mut fmt::Formatter<'_>,
  indexes: &[ASTExpression],
) -> fmt::Result {
  for index in indexes {
    write!(f, "[{}]", index)?;
  }
  write!(f, "[]")
}

impl Display for ASTAssignTarget {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      ASTAssignTarget::ArrayIndexAppend { variable, index_expr } => {
        write!(f, "{}", variable)?;
        write_indexes(f, index_expr)
      },
      ASTAssignTarget::ObjectPropertyArrayIndexAppend {
        variable,
        property,
        index_expr,
      } => {
        write!(f, "{}->{}", variable, property)?;
        write_indexes(f, index_expr)
      },
      ASTAssignTarget::StaticPropertyArrayIndexAppend {
        class_entry,
        property,
        index_expr,
      } => {
        write!(f, "{}::{}", class_entry, property)?;
        write_indexes(f, index_expr)
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use ordered_float::OrderedFloat;
  use zeph_type::span::Span;

  use super::*;
  use crate::expressions::{literal::ASTLiteral, variable::ASTVariableExpression};
  use crate::statements::{ASTLet, ASTStatement};

  fn lit(value: LiteralValue) -> ASTExpression {
    ASTExpression::Literal(ASTLiteral::new(value, Span::default()))
  }

  #[test]
  fn renders_literals_like_source() {
    assert_eq!(lit(LiteralValue::Int(-3)).to_string(), "-3");
    assert_eq!(lit(LiteralValue::Double(OrderedFloat(1.5))).to_string(), "1.5");
    assert_eq!(lit(LiteralValue::Double(OrderedFloat(2.0))).to_string(), "2.0");
    assert_eq!(lit(LiteralValue::String("a\"b".to_string())).to_string(), "\"a\\\"b\"");
    assert_eq!(lit(LiteralValue::Char(b'x')).to_string(), "'x'");
    assert_eq!(lit(LiteralValue::Null).to_string(), "null");
  }

  #[test]
  fn renders_object_property_target() {
    let target = ASTAssignTarget::ObjectPropertyArrayIndexAppend {
      variable: "obj".to_string(),
      property: "items".to_string(),
      index_expr: vec![
        lit(LiteralValue::String("a".to_string())),
        ASTExpression::Variable(ASTVariableExpression::new("k".to_string(), Span::default())),
      ],
    };

    assert_eq!(target.to_string(), "obj->items[\"a\"][k][]");
  }

  #[test]
  fn let_statement_reads_from_json_ir() {
    let json = r#"{
      "type": "let",
      "assignments": [{
        "target": {
          "assign-type": "object-property-array-index-append",
          "variable": "obj",
          "property": "items",
          "index-expr": [
            {"type": "literal", "value": {"string": "a"}},
            {"type": "variable", "name": "k"}
          ]
        },
        "expr": {"type": "literal", "value": {"int": 10}}
      }]
    }"#;

    let stmt: ASTStatement = serde_json::from_str(json).unwrap();
    let ASTStatement::Let(ASTLet { assignments, .. }) = stmt;

    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].target.index_expr().len(), 2);
    assert_eq!(assignments[0].target.to_string(), "obj->items[\"a\"][k][]");
    assert_eq!(assignments[0].expr, lit(LiteralValue::Int(10)));
  }
}
