use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Declared type of a symbol.
///
/// `Dynamic` is a reference to a refcounted runtime value. It is the only
/// declared type that can hold an object, so it is the only one whose
/// properties can be mutated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
  Int,
  UInt,
  Long,
  ULong,
  Char,
  UChar,
  Bool,
  Double,
  String,
  Null,
  Array,
  #[serde(alias = "variable")]
  Dynamic,
}

impl Display for DataType {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    let name = match self {
      DataType::Int => "int",
      DataType::UInt => "uint",
      DataType::Long => "long",
      DataType::ULong => "ulong",
      DataType::Char => "char",
      DataType::UChar => "uchar",
      DataType::Bool => "bool",
      DataType::Double => "double",
      DataType::String => "string",
      DataType::Null => "null",
      DataType::Array => "array",
      DataType::Dynamic => "variable",
    };
    write!(f, "{}", name)
  }
}

/// Type tag of a compiled expression.
///
/// Mirrors [`DataType`] for values, except that `Variable` means the compiled
/// code is a symbol name whose declared type must be looked up.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ResolvedType {
  Int,
  UInt,
  Long,
  ULong,
  Char,
  UChar,
  Bool,
  Double,
  String,
  Null,
  Array,
  Variable,
}

impl Display for ResolvedType {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    let name = match self {
      ResolvedType::Int => "int",
      ResolvedType::UInt => "uint",
      ResolvedType::Long => "long",
      ResolvedType::ULong => "ulong",
      ResolvedType::Char => "char",
      ResolvedType::UChar => "uchar",
      ResolvedType::Bool => "bool",
      ResolvedType::Double => "double",
      ResolvedType::String => "string",
      ResolvedType::Null => "null",
      ResolvedType::Array => "array",
      ResolvedType::Variable => "variable",
    };
    write!(f, "{}", name)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn declared_and_resolved_names_agree() {
    assert_eq!(DataType::ULong.to_string(), ResolvedType::ULong.to_string());
    assert_eq!(DataType::UChar.to_string(), ResolvedType::UChar.to_string());
  }

  #[test]
  fn dynamic_deserializes_from_variable_keyword() {
    let ty: DataType = serde_json::from_str("\"variable\"").unwrap();
    assert_eq!(ty, DataType::Dynamic);
    assert_eq!(ty.to_string(), "variable");
  }
}
