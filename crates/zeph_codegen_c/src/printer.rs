use std::fmt::Write;

/// Line-oriented buffer for emitted C.
#[derive(Debug, Default)]
pub struct CodePrinter {
  output: String,
}

/// Position in a [`CodePrinter`] that output can be truncated back to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Checkpoint(usize);

impl CodePrinter {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn output(
    &mut self,
    code: &str,
  ) {
    writeln!(self.output, "{}", code).unwrap();
  }

  pub fn checkpoint(&self) -> Checkpoint {
    Checkpoint(self.output.len())
  }

  /// Drops everything written after `checkpoint`.
  pub fn rollback(
    &mut self,
    checkpoint: Checkpoint,
  ) {
    self.output.truncate(checkpoint.0);
  }

  pub fn get_output(&self) -> &str {
    &self.output
  }

  pub fn is_empty(&self) -> bool {
    self.output.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn writes_one_line_per_call() {
    let mut printer = CodePrinter::new();
    printer.output("ZEPHIR_INIT_VAR(_0);");
    printer.output("ZVAL_NULL(_0);");

    assert_eq!(printer.get_output(), "ZEPHIR_INIT_VAR(_0);\nZVAL_NULL(_0);\n");
  }

  #[test]
  fn rollback_discards_later_output() {
    let mut printer = CodePrinter::new();
    printer.output("kept;");
    let checkpoint = printer.checkpoint();
    printer.output("dropped;");
    printer.rollback(checkpoint);

    assert_eq!(printer.get_output(), "kept;\n");
  }
}
