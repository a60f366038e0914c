//! Logging utilities for the zeph compiler.
//!
//! Provides macros for:
//! - Phase logging (`phase_log!`, `phase_warn!`)
//! - Debug traces by category (`trace_dbg!`)
//! - Verbose logging (`log_dbg!`, `log_trc!`)
//!
//! All output goes to stderr so it never mixes with emitted C on stdout.

use zeph_config::{DebugTrace, OutputLevel, ZephConfig};

pub fn effective_verbose(config: &ZephConfig) -> u8 {
  if config.quiet {
    return 0;
  }

  if config.debug && config.verbose < 2 {
    return 2;
  }

  config.verbose
}

pub fn log_phase(config: &ZephConfig) -> bool {
  config.output_level != OutputLevel::Quiet
}

pub fn log_debug(config: &ZephConfig) -> bool {
  effective_verbose(config) >= 2
}

pub fn log_trace(config: &ZephConfig) -> bool {
  effective_verbose(config) >= 3
}

pub fn debug_trace_enabled(
  config: &ZephConfig,
  trace: DebugTrace,
) -> bool {
  !config.quiet && (config.debug || config.debug_trace.contains(&trace))
}

/// Returns lowercase name of a DebugTrace variant for log output.
pub fn trace_name(trace: DebugTrace) -> &'static str {
  match trace {
    DebugTrace::Resolver => "resolver",
    DebugTrace::Classifier => "classifier",
    DebugTrace::Codegen => "codegen",
  }
}

/// Log a compiler phase message with an arrow prefix.
///
/// # Examples
///
/// ```ignore
/// phase_log!(&config, "Lowering {} statements", count);
/// phase_log!(&config, indent = 8, "Sub-step {}", name);
/// ```
#[macro_export]
macro_rules! phase_log {
  ($config:expr, indent = $indent:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::log_phase($config) {
      use colored::Colorize;
      eprintln!(
        "{:indent$}{} {}",
        "",
        "-->".bright_green().bold(),
        format!($fmt $(, $arg)*),
        indent = $indent
      );
    }
  }};

  ($config:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    $crate::phase_log!($config, indent = 4, $fmt $(, $arg)*);
  }};
}

/// Log a warning during a phase (yellow arrow, no indent).
#[macro_export]
macro_rules! phase_warn {
  ($config:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::log_phase($config) {
      use colored::Colorize;
      eprintln!("{} {}", "-->".bright_yellow().bold(), format!($fmt $(, $arg)*));
    }
  }};
}

/// Log a debug trace for a specific compiler component.
///
/// Output format: `debug[component]: message`
///
/// # Examples
///
/// ```ignore
/// trace_dbg!(&config, DebugTrace::Classifier, "index {} -> {:?}", i, encoding);
/// // Output: debug[classifier]: index 0 -> IntegerSlot
/// ```
#[macro_export]
macro_rules! trace_dbg {
  ($config:expr, $trace:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::debug_trace_enabled($config, $trace) {
      eprintln!(
        "debug[{}]: {}",
        $crate::trace_name($trace),
        format!($fmt $(, $arg)*)
      );
    }
  }};
}

/// Log a verbose debug message (verbosity >= 2).
#[macro_export]
macro_rules! log_dbg {
  ($config:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::log_debug($config) {
      eprintln!("debug: {}", format!($fmt $(, $arg)*));
    }
  }};
}

/// Log a trace message (verbosity >= 3).
#[macro_export]
macro_rules! log_trc {
  ($config:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::log_trace($config) {
      eprintln!("trace: {}", format!($fmt $(, $arg)*));
    }
  }};
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn debug_flag_raises_verbosity_to_two() {
    let config = ZephConfig::new_basic(true, vec![], false, 0);
    assert_eq!(effective_verbose(&config), 2);
    assert!(log_debug(&config));
    assert!(!log_trace(&config));
  }

  #[test]
  fn quiet_silences_everything() {
    let config = ZephConfig::new_basic(true, vec![DebugTrace::Codegen], true, 3);
    assert_eq!(effective_verbose(&config), 0);
    assert!(!log_phase(&config));
    assert!(!debug_trace_enabled(&config, DebugTrace::Codegen));
  }

  #[test]
  fn traces_are_selected_per_component() {
    let config = ZephConfig::new_basic(false, vec![DebugTrace::Classifier], false, 0);
    assert!(debug_trace_enabled(&config, DebugTrace::Classifier));
    assert!(!debug_trace_enabled(&config, DebugTrace::Codegen));
  }
}
