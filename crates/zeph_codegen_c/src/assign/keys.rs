use crate::assign::classify::{ClassifiedIndex, IndexEncoding};
use crate::literal::length_prefixed;

/// Final key character telling the runtime to append instead of assign.
pub const APPEND_MARKER: char = 'a';

/// Key string, argument list and slot count for a chain of indexes.
///
/// The three grow together in [`IndexKeys::push`]; nothing else writes them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexKeys {
  encodings: Vec<IndexEncoding>,
  args: Vec<String>,
  params: usize,
}

impl IndexKeys {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(
    &mut self,
    index: ClassifiedIndex,
  ) {
    let arg = match index.encoding {
      IndexEncoding::StringSlot => length_prefixed(&index.code),
      IndexEncoding::IntegerSlot | IndexEncoding::DynamicSlot => index.code,
    };

    self.params += index.encoding.params();
    self.encodings.push(index.encoding);
    self.args.push(arg);
  }

  /// One key per index followed by [`APPEND_MARKER`].
  pub fn keys(&self) -> String {
    let mut keys: String = self.encodings.iter().map(IndexEncoding::key).collect();
    keys.push(APPEND_MARKER);
    keys
  }

  pub fn encodings(&self) -> &[IndexEncoding] {
    &self.encodings
  }

  pub fn args(&self) -> &[String] {
    &self.args
  }

  /// Native arguments the runtime will read for the indexes.
  pub fn params(&self) -> usize {
    self.params
  }

  pub fn len(&self) -> usize {
    self.encodings.len()
  }

  pub fn is_empty(&self) -> bool {
    self.encodings.is_empty()
  }
}

impl FromIterator<ClassifiedIndex> for IndexKeys {
  fn from_iter<I: IntoIterator<Item = ClassifiedIndex>>(iter: I) -> Self {
    let mut keys = IndexKeys::new();
    for index in iter {
      keys.push(index);
    }
    keys
  }
}

#[cfg(test)]
mod tests {
  use zeph_type::span::Span;

  use super::*;

  fn index(
    encoding: IndexEncoding,
    code: &str,
  ) -> ClassifiedIndex {
    ClassifiedIndex {
      encoding,
      code: code.to_string(),
      span: Span::default(),
    }
  }

  #[test]
  fn mixed_chain_builds_keys_and_args_in_order() {
    let keys: IndexKeys = vec![
      index(IndexEncoding::StringSlot, "a"),
      index(IndexEncoding::DynamicSlot, "k"),
      index(IndexEncoding::IntegerSlot, "1"),
    ]
    .into_iter()
    .collect();

    assert_eq!(keys.keys(), "szla");
    assert_eq!(keys.params(), 4);
    assert_eq!(keys.args(), ["SL(\"a\")", "k", "1"]);
  }

  #[test]
  fn empty_chain_is_only_the_marker() {
    let keys = IndexKeys::new();

    assert!(keys.is_empty());
    assert_eq!(keys.keys(), "a");
    assert_eq!(keys.params(), 0);
  }
}
