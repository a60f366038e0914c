use serde::{Deserialize, Serialize};

use crate::{BytePosition, file::FileId};

/// Byte range in a source file. The default span is empty and points at
/// [`FileId::SYNTHETIC`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
  #[serde(default)]
  pub start: BytePosition,
  #[serde(default)]
  pub end: BytePosition,
  #[serde(default = "synthetic_file")]
  pub file: FileId,
}

fn synthetic_file() -> FileId {
  FileId::SYNTHETIC
}

impl Default for Span {
  fn default() -> Self {
    Self::empty_at(FileId::SYNTHETIC, BytePosition(0))
  }
}

impl Span {
  /// Create a new span with validation.
  ///
  /// # Panics
  /// Panics in debug mode if `start > end`.
  pub fn new(
    file: FileId,
    start: BytePosition,
    end: BytePosition,
  ) -> Self {
    debug_assert!(
      start <= end,
      "Span::new() called with invalid range: start {} > end {}",
      start,
      end
    );
    Self { file, start, end }
  }

  pub fn merge(
    a: &Self,
    b: &Self,
  ) -> Self {
    debug_assert_eq!(a.file, b.file, "Cannot merge spans from different files");
    Self {
      file: a.file,
      start: a.start.min(b.start),
      end: a.end.max(b.end),
    }
  }

  pub fn empty_at(
    file: FileId,
    pos: BytePosition,
  ) -> Self {
    Self {
      file,
      start: pos,
      end: pos,
    }
  }

  /// Returns the length of the span in bytes, 0 for an inverted span.
  pub fn len(&self) -> usize {
    self.end.0.saturating_sub(self.start.0) as usize
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// True when the span carries no source location.
  pub fn is_synthetic(&self) -> bool {
    self.file == FileId::SYNTHETIC
  }

  /// `self`, or `fallback` when `self` carries no source location.
  pub fn or(
    &self,
    fallback: &Span,
  ) -> Span {
    if self.is_synthetic() { fallback.clone() } else { self.clone() }
  }
}

impl std::fmt::Display for Span {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    write!(f, "(span start: {} end: {} file: {})", self.start, self.end, self.file)
  }
}
