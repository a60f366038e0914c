use serde::{Deserialize, Serialize};

use crate::{Id, span::Span, types::DataType};

pub type VariableId = Id<Variable>;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
  #[default]
  Local,
  Parameter,
  /// Compiler-generated holder (`_0`, `_1`, ...).
  Temporary,
  /// The implicit receiver; always readable.
  This,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
  pub name: String,
  #[serde(rename = "type")]
  pub ty: DataType,
  #[serde(default)]
  pub initialized: bool,
  #[serde(default)]
  pub storage: StorageKind,
  #[serde(default)]
  pub span: Span,
}

impl Variable {
  pub fn new(
    name: String,
    ty: DataType,
    storage: StorageKind,
    span: Span,
  ) -> Self {
    Self {
      name,
      ty,
      initialized: storage == StorageKind::This || storage == StorageKind::Parameter,
      storage,
      span,
    }
  }

  pub fn is_temporary(&self) -> bool {
    self.storage == StorageKind::Temporary
  }

  /// `this` never needs an explicit initialization before being read.
  pub fn is_readable(&self) -> bool {
    self.initialized || self.storage == StorageKind::This
  }
}
