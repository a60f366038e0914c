use std::fmt::Write;

use zeph_config::CHeader;

/// Runtime headers the generated unit depends on, in first-use order.
#[derive(Debug, Default)]
pub struct HeadersManager {
  headers: Vec<CHeader>,
}

impl HeadersManager {
  pub fn new() -> Self {
    Self::default()
  }

  /// Records `header`. Adding the same header again is a no-op.
  pub fn add(
    &mut self,
    header: CHeader,
  ) {
    if !self.headers.contains(&header) {
      self.headers.push(header);
    }
  }

  pub fn contains(
    &self,
    path: &str,
  ) -> bool {
    self.headers.iter().any(|h| h.path == path)
  }

  pub fn headers(&self) -> &[CHeader] {
    &self.headers
  }

  pub fn len(&self) -> usize {
    self.headers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.headers.is_empty()
  }

  /// Forgets headers recorded after the first `len`.
  pub fn truncate(
    &mut self,
    len: usize,
  ) {
    self.headers.truncate(len);
  }

  pub fn emit(&self) -> String {
    let mut output = String::new();

    for header in &self.headers {
      if header.quoted {
        writeln!(output, "#include \"{}\"", header.path).unwrap();
      } else {
        writeln!(output, "#include <{}>", header.path).unwrap();
      }
    }

    output
  }
}
