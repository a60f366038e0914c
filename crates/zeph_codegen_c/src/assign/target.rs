use zeph_ast::{ASTAssignTarget, ASTExpression};
use zeph_config::CHeader;
use zeph_type::types::DataType;

use crate::literal::{escape_c_string, length_prefixed};

/// How the container being appended to is reached.
///
/// Every strategy shares the index classification and key building; they only
/// differ in target validation, the runtime primitive and its leading
/// arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendTarget<'a> {
  /// `x[a][b][] = v`
  Variable { variable: &'a str },
  /// `x->y[a][b][] = v`
  ObjectProperty { variable: &'a str, property: &'a str },
  /// `Foo::y[a][b][] = v`, `class_entry` is the C class-entry symbol.
  StaticProperty { class_entry: &'a str, property: &'a str },
}

impl<'a> AppendTarget<'a> {
  pub fn from_ast(target: &'a ASTAssignTarget) -> (Self, &'a [ASTExpression]) {
    match target {
      ASTAssignTarget::ArrayIndexAppend { variable, index_expr } => {
        (AppendTarget::Variable { variable: variable.as_str() }, index_expr.as_slice())
      },
      ASTAssignTarget::ObjectPropertyArrayIndexAppend {
        variable,
        property,
        index_expr,
      } => (
        AppendTarget::ObjectProperty {
          variable: variable.as_str(),
          property: property.as_str(),
        },
        index_expr.as_slice(),
      ),
      ASTAssignTarget::StaticPropertyArrayIndexAppend {
        class_entry,
        property,
        index_expr,
      } => (
        AppendTarget::StaticProperty {
          class_entry: class_entry.as_str(),
          property: property.as_str(),
        },
        index_expr.as_slice(),
      ),
    }
  }

  pub fn function_name(&self) -> &'static str {
    match self {
      AppendTarget::Variable { .. } => "zephir_array_update_multi",
      AppendTarget::ObjectProperty { .. } => "zephir_update_property_array_multi",
      AppendTarget::StaticProperty { .. } => "zephir_update_static_property_array_multi_ce",
    }
  }

  /// Runtime header defining [`Self::function_name`].
  pub fn runtime_header(&self) -> CHeader {
    match self {
      AppendTarget::Variable { .. } => CHeader::kernel("array"),
      AppendTarget::ObjectProperty { .. } | AppendTarget::StaticProperty { .. } => CHeader::kernel("object"),
    }
  }

  /// The local variable that must be valid before any index is compiled.
  pub fn target_variable(&self) -> Option<&'a str> {
    match *self {
      AppendTarget::Variable { variable } | AppendTarget::ObjectProperty { variable, .. } => Some(variable),
      AppendTarget::StaticProperty { .. } => None,
    }
  }

  pub fn accepts(
    &self,
    ty: DataType,
  ) -> bool {
    match self {
      AppendTarget::Variable { .. } => matches!(ty, DataType::Dynamic | DataType::Array),
      AppendTarget::ObjectProperty { .. } => ty == DataType::Dynamic,
      AppendTarget::StaticProperty { .. } => true,
    }
  }

  /// What the target variable is used as, for diagnostics.
  pub fn expected_use(&self) -> &'static str {
    match self {
      AppendTarget::Variable { .. } => "array",
      AppendTarget::ObjectProperty { .. } | AppendTarget::StaticProperty { .. } => "object",
    }
  }

  /// Arguments before the value holder: the container and, for properties, the property name.
  pub fn leading_args(&self) -> Vec<String> {
    match self {
      AppendTarget::Variable { variable } => vec![format!("&{}", variable)],
      AppendTarget::ObjectProperty { variable, property } => {
        vec![variable.to_string(), length_prefixed(&escape_c_string(property))]
      },
      AppendTarget::StaticProperty { class_entry, property } => {
        vec![class_entry.to_string(), length_prefixed(&escape_c_string(property))]
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn object_property_requires_dynamic_target() {
    let target = AppendTarget::ObjectProperty {
      variable: "obj",
      property: "items",
    };

    assert!(target.accepts(DataType::Dynamic));
    assert!(!target.accepts(DataType::Array));
    assert_eq!(target.leading_args(), vec!["obj", "SL(\"items\")"]);
  }

  #[test]
  fn bare_variable_accepts_arrays_and_passes_address() {
    let target = AppendTarget::Variable { variable: "list" };

    assert!(target.accepts(DataType::Array));
    assert!(!target.accepts(DataType::String));
    assert_eq!(target.leading_args(), vec!["&list"]);
    assert_eq!(target.runtime_header(), CHeader::kernel("array"));
  }

  #[test]
  fn static_property_has_no_target_variable() {
    let target = AppendTarget::StaticProperty {
      class_entry: "test_foo_ce",
      property: "cache",
    };

    assert_eq!(target.target_variable(), None);
    assert_eq!(target.function_name(), "zephir_update_static_property_array_multi_ce");
  }
}
