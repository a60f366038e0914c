use serde::{Deserialize, Serialize};

/// Header to include in generated C code with style info
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CHeader {
  /// The path/name of the header (e.g. "kernel/object.h")
  pub path: String,
  /// true = #include "...", false = #include <...>
  #[serde(default = "default_quoted")]
  pub quoted: bool,
}

fn default_quoted() -> bool {
  true
}

impl CHeader {
  pub fn kernel(name: &str) -> Self {
    Self {
      path: format!("kernel/{}.h", name),
      quoted: true,
    }
  }
}

/// Options that change the shape of emitted C.
///
/// Expected format in zeph.toml:
/// ```toml
/// [codegen]
/// zts = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
  /// Emit the `TSRMLS_CC` thread-safety macro after runtime-value arguments.
  pub zts: bool,
  /// Extra headers every generated unit includes.
  pub extra_headers: Vec<CHeader>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebugTrace {
  Resolver,
  Classifier,
  Codegen,
}

/// Controls the verbosity level of output.
///
/// - `Quiet`: No output except errors
/// - `Detailed`: Structured progress output (default)
/// - `Verbose`: Detailed output with internal phases
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputLevel {
  Quiet,
  #[default]
  Detailed,
  Verbose,
}

/// On-disk shape of `zeph.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct ZephConfigFile {
  debug: bool,
  debug_trace: Vec<DebugTrace>,
  quiet: bool,
  verbose: u8,
  codegen: CodegenConfig,
}

#[derive(Debug, Clone, Default)]
pub struct ZephConfig {
  pub debug: bool,
  pub debug_trace: Vec<DebugTrace>,
  pub quiet: bool,
  pub verbose: u8,
  pub output_level: OutputLevel,
  pub codegen: CodegenConfig,
}

impl ZephConfig {
  pub fn new_basic(
    debug: bool,
    debug_trace: Vec<DebugTrace>,
    quiet: bool,
    verbose: u8,
  ) -> Self {
    let output_level = if quiet {
      OutputLevel::Quiet
    } else if verbose > 0 {
      OutputLevel::Verbose
    } else {
      OutputLevel::Detailed
    };

    Self {
      debug,
      debug_trace,
      quiet,
      verbose,
      output_level,
      ..Self::default()
    }
  }

  pub fn with_codegen(
    mut self,
    codegen: CodegenConfig,
  ) -> Self {
    self.codegen = codegen;
    self
  }

  /// Parse a `zeph.toml` document. Missing tables and keys take their defaults.
  pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
    let file: ZephConfigFile = toml::from_str(content)?;
    let config = Self::new_basic(file.debug, file.debug_trace, file.quiet, file.verbose);

    Ok(config.with_codegen(file.codegen))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_document_uses_defaults() {
    let config = ZephConfig::from_toml_str("").unwrap();

    assert!(!config.codegen.zts);
    assert!(config.codegen.extra_headers.is_empty());
    assert_eq!(config.output_level, OutputLevel::Detailed);
  }

  #[test]
  fn reads_codegen_table() {
    let config = ZephConfig::from_toml_str(
      r#"
verbose = 2
debug_trace = ["classifier", "codegen"]

[codegen]
zts = true
extra_headers = [{ path = "kernel/main.h" }, { path = "php.h", quoted = false }]
"#,
    )
    .unwrap();

    assert!(config.codegen.zts);
    assert_eq!(config.verbose, 2);
    assert_eq!(config.output_level, OutputLevel::Verbose);
    assert_eq!(config.debug_trace, vec![DebugTrace::Classifier, DebugTrace::Codegen]);
    assert_eq!(config.codegen.extra_headers[0], CHeader::kernel("main"));
    assert!(!config.codegen.extra_headers[1].quoted);
  }

  #[test]
  fn rejects_unknown_trace_name() {
    assert!(ZephConfig::from_toml_str("debug_trace = [\"linker\"]").is_err());
  }

  #[test]
  fn quiet_wins_over_verbose() {
    let config = ZephConfig::new_basic(false, vec![], true, 3);
    assert_eq!(config.output_level, OutputLevel::Quiet);
  }
}
