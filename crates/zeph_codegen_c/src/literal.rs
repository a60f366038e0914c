/// Escapes `s` for use inside a double-quoted C string literal.
pub fn escape_c_string(s: &str) -> String {
  let mut result = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '\n' => result.push_str("\\n"),
      '\r' => result.push_str("\\r"),
      '\t' => result.push_str("\\t"),
      '\0' => result.push_str("\\000"),
      '\\' => result.push_str("\\\\"),
      '"' => result.push_str("\\\""),
      c if c.is_ascii_graphic() || c == ' ' => result.push(c),
      c => {
        let mut buf = [0u8; 4];
        for byte in c.encode_utf8(&mut buf).bytes() {
          // Octal keeps the following character from extending the escape.
          result.push_str(&format!("\\{:03o}", byte));
        }
      },
    }
  }
  result
}

/// Length-prefixed literal: `SL("...")` expands to the string and its length,
/// so contents with embedded NULs survive the call boundary.
///
/// `escaped` must already be escaped with [`escape_c_string`].
pub fn length_prefixed(escaped: &str) -> String {
  format!("SL(\"{}\")", escaped)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn escapes_quotes_and_control_characters() {
    assert_eq!(escape_c_string("a\"b\\c"), "a\\\"b\\\\c");
    assert_eq!(escape_c_string("line\nnext\01"), "line\\nnext\\0001");
  }

  #[test]
  fn escapes_non_ascii_as_octal_bytes() {
    assert_eq!(escape_c_string("é"), "\\303\\251");
  }

  #[test]
  fn wraps_in_sl_macro() {
    assert_eq!(length_prefixed("items"), "SL(\"items\")");
  }
}
