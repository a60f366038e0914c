use std::fmt::Display;

use zeph_ast::ASTExpression;
use zeph_config::DebugTrace;
use zeph_diagnostics::message::DiagnosticMessage;
use zeph_log::trace_dbg;
use zeph_type::span::Span;
use zeph_type::types::{DataType, ResolvedType};

use crate::context::CompilationContext;
use crate::expr::{ExpressionResolver, ResolvedValue};

/// How one index is passed to the runtime.
///
/// The runtime reads the key string left to right and pulls [`Self::params`]
/// arguments per character, so both must always agree.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IndexEncoding {
  /// A native `long`.
  IntegerSlot,
  /// A `char *` and its length, passed through `SL("...")`.
  StringSlot,
  /// A runtime value, passed by name.
  DynamicSlot,
}

impl IndexEncoding {
  pub fn key(&self) -> char {
    match self {
      IndexEncoding::IntegerSlot => 'l',
      IndexEncoding::StringSlot => 's',
      IndexEncoding::DynamicSlot => 'z',
    }
  }

  pub fn params(&self) -> usize {
    match self {
      IndexEncoding::StringSlot => 2,
      IndexEncoding::IntegerSlot | IndexEncoding::DynamicSlot => 1,
    }
  }
}

impl Display for IndexEncoding {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    write!(f, "{}", self.key())
  }
}

/// An index ready to be pushed into the key builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedIndex {
  pub encoding: IndexEncoding,
  /// Raw code for integer slots, escaped contents for string slots, the
  /// variable name for dynamic slots.
  pub code: String,
  pub span: Span,
}

/// Compiles every index expression, in order, rejecting value types that can
/// never key an array.
///
/// Nothing is classified until all indexes resolved. Errors on indexes
/// without a source location point at `stmt_span`.
pub fn resolve_indexes(
  indexes: &[ASTExpression],
  stmt_span: &Span,
  resolver: &mut dyn ExpressionResolver,
  ctx: &mut CompilationContext,
) -> Result<Vec<ResolvedValue>, DiagnosticMessage> {
  let mut resolved = Vec::with_capacity(indexes.len());

  for expr in indexes {
    let value = resolver.compile(expr, ctx).map_err(|err| err.or_span(stmt_span))?;

    match value.ty {
      ResolvedType::Int
      | ResolvedType::UInt
      | ResolvedType::Long
      | ResolvedType::ULong
      | ResolvedType::String
      | ResolvedType::Variable => resolved.push(value),
      ResolvedType::Char
      | ResolvedType::UChar
      | ResolvedType::Bool
      | ResolvedType::Double
      | ResolvedType::Null
      | ResolvedType::Array => {
        return Err(DiagnosticMessage::UnsupportedIndexExpressionType {
          expr: expr.to_string(),
          ty: value.ty,
          span: expr.span().or(stmt_span),
        });
      },
    }
  }

  Ok(resolved)
}

pub fn classify_index(
  index: &ResolvedValue,
  stmt_span: &Span,
  ctx: &CompilationContext,
) -> Result<ClassifiedIndex, DiagnosticMessage> {
  let span = index.span.or(stmt_span);

  let encoding = match index.ty {
    ResolvedType::Int | ResolvedType::UInt | ResolvedType::Long | ResolvedType::ULong => IndexEncoding::IntegerSlot,
    ResolvedType::String => IndexEncoding::StringSlot,
    ResolvedType::Variable => {
      let variable = ctx.get_variable_for_read(&index.code, &span)?;

      match variable.ty {
        DataType::Int | DataType::UInt | DataType::Long | DataType::ULong => IndexEncoding::IntegerSlot,
        DataType::String | DataType::Dynamic => IndexEncoding::DynamicSlot,
        DataType::Char
        | DataType::UChar
        | DataType::Bool
        | DataType::Double
        | DataType::Null
        | DataType::Array => {
          return Err(DiagnosticMessage::UnsupportedVariableIndexType {
            name: variable.name,
            ty: variable.ty,
            span,
          });
        },
      }
    },
    ResolvedType::Char
    | ResolvedType::UChar
    | ResolvedType::Bool
    | ResolvedType::Double
    | ResolvedType::Null
    | ResolvedType::Array => {
      return Err(DiagnosticMessage::UnsupportedIndexExpressionType {
        expr: index.code.clone(),
        ty: index.ty,
        span,
      });
    },
  };

  trace_dbg!(&ctx.config, DebugTrace::Classifier, "{} `{}` -> {:?}", index.ty, index.code, encoding);

  Ok(ClassifiedIndex {
    encoding,
    code: index.code.clone(),
    span: index.span.clone(),
  })
}
