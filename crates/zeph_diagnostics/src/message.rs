use std::fmt;

use zeph_type::span::Span;
use zeph_type::types::{DataType, ResolvedType};

use super::diagnostic_report::{Diagnostic, Severity};

#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticMessage {
  // #region Assignment target
  UninitializedTargetVariable {
    name: String,
    span: Span,
  },
  InvalidTargetType {
    name: String,
    ty: DataType,
    /// What the statement tried to use the variable as ("object", "array").
    expected: &'static str,
    span: Span,
  },
  // #endregion Assignment target
  // #region Indexes
  UnsupportedIndexExpressionType {
    expr: String,
    ty: ResolvedType,
    span: Span,
  },
  UnsupportedVariableIndexType {
    name: String,
    ty: DataType,
    span: Span,
  },
  // #endregion Indexes
  // #region Symbols
  UndeclaredVariable {
    name: String,
    span: Span,
  },
  UninitializedVariableRead {
    name: String,
    span: Span,
  },
  // #endregion Symbols
}

impl fmt::Display for DiagnosticMessage {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    match self {
      DiagnosticMessage::UninitializedTargetVariable { name, .. } => {
        write!(f, "Cannot mutate variable '{}' because it is not initialized", name)
      },
      DiagnosticMessage::InvalidTargetType { name, ty, expected, .. } => {
        write!(f, "Attempt to use variable '{}' of type {} as {}", name, ty, expected)
      },
      DiagnosticMessage::UnsupportedIndexExpressionType { expr, ty, .. } => {
        write!(f, "Expression '{}' of type {} cannot be used as index without cast", expr, ty)
      },
      DiagnosticMessage::UnsupportedVariableIndexType { name, ty, .. } => {
        write!(f, "Variable '{}' of type {} cannot be used as array index", name, ty)
      },
      DiagnosticMessage::UndeclaredVariable { name, .. } => write!(f, "Undeclared variable '{}'", name),
      DiagnosticMessage::UninitializedVariableRead { name, .. } => {
        write!(f, "Cannot read variable '{}' because it is not initialized", name)
      },
    }
  }
}

impl DiagnosticMessage {
  pub fn report(&self) -> Diagnostic {
    let mut diagnostic = Diagnostic::new(self.level(), self.to_string(), self.code(), self.primary_span());
    for (span, label) in self.labels() {
      diagnostic = diagnostic.with_label(span, label);
    }
    for note in self.notes() {
      diagnostic = diagnostic.with_note(note);
    }
    diagnostic
  }

  pub fn primary_span(&self) -> Span {
    match self {
      DiagnosticMessage::UninitializedTargetVariable { span, .. }
      | DiagnosticMessage::InvalidTargetType { span, .. }
      | DiagnosticMessage::UnsupportedIndexExpressionType { span, .. }
      | DiagnosticMessage::UnsupportedVariableIndexType { span, .. }
      | DiagnosticMessage::UndeclaredVariable { span, .. }
      | DiagnosticMessage::UninitializedVariableRead { span, .. } => span.clone(),
    }
  }

  /// Replaces a primary span that carries no source location with `fallback`.
  pub fn or_span(
    mut self,
    fallback: &Span,
  ) -> Self {
    let span = self.span_mut();
    if span.is_synthetic() {
      *span = fallback.clone();
    }
    self
  }

  fn span_mut(&mut self) -> &mut Span {
    match self {
      DiagnosticMessage::UninitializedTargetVariable { span, .. }
      | DiagnosticMessage::InvalidTargetType { span, .. }
      | DiagnosticMessage::UnsupportedIndexExpressionType { span, .. }
      | DiagnosticMessage::UnsupportedVariableIndexType { span, .. }
      | DiagnosticMessage::UndeclaredVariable { span, .. }
      | DiagnosticMessage::UninitializedVariableRead { span, .. } => span,
    }
  }

  pub fn code(&self) -> String {
    match self {
      DiagnosticMessage::UninitializedTargetVariable { .. } => "Z0001",
      DiagnosticMessage::InvalidTargetType { .. } => "Z0002",
      DiagnosticMessage::UnsupportedIndexExpressionType { .. } => "Z0003",
      DiagnosticMessage::UnsupportedVariableIndexType { .. } => "Z0004",
      DiagnosticMessage::UndeclaredVariable { .. } => "Z0005",
      DiagnosticMessage::UninitializedVariableRead { .. } => "Z0006",
    }
    .to_string()
  }

  fn level(&self) -> Severity {
    Severity::Error
  }

  fn labels(&self) -> Vec<(Span, String)> {
    match self {
      DiagnosticMessage::InvalidTargetType { name, ty, span, .. }
      | DiagnosticMessage::UnsupportedVariableIndexType { name, ty, span } => {
        vec![(span.clone(), format!("'{}' is declared as {}", name, ty))]
      },
      _ => vec![],
    }
  }

  fn notes(&self) -> Vec<String> {
    match self {
      DiagnosticMessage::UnsupportedIndexExpressionType { .. } => {
        vec!["indexes must be int, uint, long, ulong, string or a variable holding one of them".to_string()]
      },
      DiagnosticMessage::UnsupportedVariableIndexType { .. } => {
        vec!["cast the variable to long or string before using it as an index".to_string()]
      },
      _ => vec![],
    }
  }
}

#[cfg(test)]
mod tests {
  use zeph_type::BytePosition;
  use zeph_type::file::FileId;

  use super::*;

  #[test]
  fn codes_are_stable() {
    let span = Span::default();
    let uninit = DiagnosticMessage::UninitializedTargetVariable {
      name: "obj".to_string(),
      span: span.clone(),
    };
    let var_index = DiagnosticMessage::UnsupportedVariableIndexType {
      name: "z".to_string(),
      ty: DataType::Array,
      span,
    };

    assert_eq!(uninit.code(), "Z0001");
    assert_eq!(var_index.code(), "Z0004");
  }

  #[test]
  fn report_carries_message_and_notes() {
    let message = DiagnosticMessage::UnsupportedIndexExpressionType {
      expr: "1.5".to_string(),
      ty: ResolvedType::Double,
      span: Span::default(),
    };
    let report = message.report();

    assert!(report.is_error());
    assert_eq!(report.error_code, "Z0003");
    assert_eq!(report.message, "Expression '1.5' of type double cannot be used as index without cast");
    assert_eq!(report.notes.len(), 1);
  }

  #[test]
  fn or_span_only_replaces_synthetic_spans() {
    let stmt = Span::new(FileId::new(0), BytePosition(4), BytePosition(30));
    let located = Span::new(FileId::new(0), BytePosition(10), BytePosition(11));
    let undeclared = |span: Span| DiagnosticMessage::UndeclaredVariable {
      name: "k".to_string(),
      span,
    };

    assert_eq!(undeclared(Span::default()).or_span(&stmt).primary_span(), stmt);
    assert_eq!(undeclared(located.clone()).or_span(&stmt).primary_span(), located);
  }

  #[test]
  fn invalid_target_names_the_expected_use() {
    let message = DiagnosticMessage::InvalidTargetType {
      name: "count".to_string(),
      ty: DataType::Int,
      expected: "object",
      span: Span::default(),
    };

    assert_eq!(message.to_string(), "Attempt to use variable 'count' of type int as object");
    assert_eq!(message.report().labels[0].message, "'count' is declared as int");
  }
}
