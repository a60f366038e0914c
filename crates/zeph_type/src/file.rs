use std::collections::HashMap;
use std::path::PathBuf;

use crate::{BytePosition, Id, Store, span::Span};

pub type FileId = Id<SourceFile>;

impl FileId {
  /// Sentinel for statements built by the compiler itself rather than read from a file.
  pub const SYNTHETIC: FileId = FileId::new(u32::MAX);
}

#[derive(Default, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SourceFile {
  pub path: PathBuf,
  pub text: String,
  pub line_starts: Vec<BytePosition>,
}

impl SourceFile {
  pub fn new(
    path: PathBuf,
    text: String,
  ) -> Self {
    let line_starts = compute_line_starts(&text);
    Self { path, text, line_starts }
  }
}

impl std::fmt::Display for Id<SourceFile> {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> std::fmt::Result {
    write!(f, "(file id: {})", self.index())
  }
}

pub struct SourceMap {
  files: Store<SourceFile>,
  by_path: HashMap<PathBuf, FileId>,
}

impl Default for SourceMap {
  fn default() -> Self {
    Self::new()
  }
}

impl SourceMap {
  pub fn new() -> Self {
    Self {
      files: Store::new(),
      by_path: HashMap::new(),
    }
  }

  pub fn add_file<P: Into<PathBuf>>(
    &mut self,
    path: P,
    text: String,
  ) -> FileId {
    let path = path.into();

    if let Some(id) = self.by_path.get(&path) {
      return *id;
    }

    let id = self.files.alloc(SourceFile::new(path.clone(), text));
    self.by_path.insert(path, id);
    id
  }

  #[inline]
  pub fn get(
    &self,
    id: &FileId,
  ) -> &SourceFile {
    self.files.get(id)
  }

  pub fn contains(
    &self,
    id: &FileId,
  ) -> bool {
    (id.index() as usize) < self.files.len()
  }

  /// 1-based line and column of `pos`.
  pub fn line_col(
    &self,
    file: &FileId,
    pos: BytePosition,
  ) -> (u32, u32) {
    let f = self.get(file);
    let line = upper_bound_line(&f.line_starts, pos);
    let line_start = f.line_starts[line].0 as usize;
    let end = (pos.0 as usize).min(f.text.len());
    let col = f.text[line_start..end].chars().count();

    ((line as u32) + 1, (col as u32) + 1)
  }

  pub fn slice(
    &self,
    span: &Span,
  ) -> &str {
    let f = self.get(&span.file);
    &f.text[span.start.0 as usize..span.end.0 as usize]
  }
}

fn compute_line_starts(text: &str) -> Vec<BytePosition> {
  let mut v = vec![BytePosition(0)];

  for (i, b) in text.bytes().enumerate() {
    if b == b'\n' {
      v.push(BytePosition((i + 1) as u32));
    }
  }
  v
}

fn upper_bound_line(
  starts: &[BytePosition],
  pos: BytePosition,
) -> usize {
  // Index of the last line start <= pos.
  starts.partition_point(|start| *start <= pos).saturating_sub(1)
}
