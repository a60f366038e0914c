use std::sync::Arc;

use zeph_config::ZephConfig;
use zeph_diagnostics::message::DiagnosticMessage;
use zeph_type::span::Span;
use zeph_type::symbol::{SymbolCheckpoint, SymbolTable};
use zeph_type::types::DataType;
use zeph_type::variable::Variable;

use crate::headers::HeadersManager;
use crate::printer::{Checkpoint, CodePrinter};

/// Emitted code and declared temporaries at a point in time.
#[derive(Debug, Copy, Clone)]
pub struct ContextCheckpoint {
  printer: Checkpoint,
  symbols: SymbolCheckpoint,
  headers: usize,
}

/// State shared by every statement of the function being compiled.
///
/// Passed as `&mut` through the whole lowering; statements must be compiled
/// one at a time against it.
pub struct CompilationContext {
  pub symbols: SymbolTable,
  pub printer: CodePrinter,
  pub headers: HeadersManager,
  pub config: Arc<ZephConfig>,
}

impl CompilationContext {
  pub fn new(config: Arc<ZephConfig>) -> Self {
    Self::with_symbols(config, SymbolTable::new())
  }

  pub fn with_symbols(
    config: Arc<ZephConfig>,
    symbols: SymbolTable,
  ) -> Self {
    let mut headers = HeadersManager::new();
    for header in &config.codegen.extra_headers {
      headers.add(header.clone());
    }

    Self {
      symbols,
      printer: CodePrinter::new(),
      headers,
      config,
    }
  }

  /// Looks `name` up for reading: it must be declared and initialized.
  pub fn get_variable_for_read(
    &self,
    name: &str,
    span: &Span,
  ) -> Result<Variable, DiagnosticMessage> {
    let variable = self.get_variable(name, span)?;

    if !variable.is_readable() {
      return Err(DiagnosticMessage::UninitializedVariableRead {
        name: name.to_string(),
        span: span.clone(),
      });
    }

    Ok(variable)
  }

  /// Looks `name` up without checking its initialization state.
  pub fn get_variable(
    &self,
    name: &str,
    span: &Span,
  ) -> Result<Variable, DiagnosticMessage> {
    self
      .symbols
      .lookup(name)
      .cloned()
      .ok_or_else(|| DiagnosticMessage::UndeclaredVariable {
        name: name.to_string(),
        span: span.clone(),
      })
  }

  /// Registers a fresh runtime-value temporary, emits its initialization and returns its name.
  pub fn init_temp_variable(
    &mut self,
    span: &Span,
  ) -> String {
    let name = self
      .symbols
      .temp_variable_for_write(DataType::Dynamic, span.clone())
      .name
      .clone();
    self.printer.output(&format!("ZEPHIR_INIT_VAR({});", name));
    name
  }

  pub fn checkpoint(&self) -> ContextCheckpoint {
    ContextCheckpoint {
      printer: self.printer.checkpoint(),
      symbols: self.symbols.checkpoint(),
      headers: self.headers.len(),
    }
  }

  /// Discards code, temporaries and headers produced since `checkpoint`.
  pub fn rollback(
    &mut self,
    checkpoint: ContextCheckpoint,
  ) {
    self.printer.rollback(checkpoint.printer);
    self.symbols.rollback(checkpoint.symbols);
    self.headers.truncate(checkpoint.headers);
  }

  /// Headers followed by the emitted statements.
  pub fn emit(&self) -> String {
    let headers = self.headers.emit();
    if headers.is_empty() {
      return self.printer.get_output().to_string();
    }

    format!("{}\n{}", headers, self.printer.get_output())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use zeph_config::{CHeader, CodegenConfig};
  use zeph_type::variable::StorageKind;

  fn ctx_with(vars: Vec<Variable>) -> CompilationContext {
    let mut symbols = SymbolTable::new();
    for var in vars {
      symbols.declare(var);
    }
    CompilationContext::with_symbols(Arc::new(ZephConfig::default()), symbols)
  }

  #[test]
  fn read_of_undeclared_variable_fails() {
    let ctx = ctx_with(vec![]);
    let err = ctx.get_variable_for_read("ghost", &Span::default()).unwrap_err();

    assert_eq!(err.code(), "Z0005");
  }

  #[test]
  fn read_of_uninitialized_variable_fails() {
    let ctx = ctx_with(vec![Variable::new(
      "k".to_string(),
      DataType::Int,
      StorageKind::Local,
      Span::default(),
    )]);

    let err = ctx.get_variable_for_read("k", &Span::default()).unwrap_err();
    assert_eq!(err.code(), "Z0006");
    assert!(ctx.get_variable("k", &Span::default()).is_ok());
  }

  #[test]
  fn init_temp_variable_emits_init_macro() {
    let mut ctx = ctx_with(vec![]);
    let name = ctx.init_temp_variable(&Span::default());

    assert_eq!(name, "_0");
    assert_eq!(ctx.printer.get_output(), "ZEPHIR_INIT_VAR(_0);\n");
  }

  #[test]
  fn rollback_discards_code_and_temporaries() {
    let mut ctx = ctx_with(vec![]);
    ctx.printer.output("kept;");
    let checkpoint = ctx.checkpoint();
    ctx.init_temp_variable(&Span::default());
    ctx.headers.add(CHeader::kernel("object"));
    ctx.rollback(checkpoint);

    assert_eq!(ctx.printer.get_output(), "kept;\n");
    assert_eq!(ctx.symbols.temporaries().count(), 0);
    assert!(ctx.headers.is_empty());
  }

  #[test]
  fn extra_headers_come_first() {
    let config = ZephConfig::default().with_codegen(CodegenConfig {
      zts: false,
      extra_headers: vec![CHeader::kernel("main")],
    });
    let mut ctx = CompilationContext::new(Arc::new(config));
    ctx.headers.add(CHeader::kernel("object"));
    ctx.printer.output("x;");

    assert_eq!(ctx.emit(), "#include \"kernel/main.h\"\n#include \"kernel/object.h\"\n\nx;\n");
  }
}
