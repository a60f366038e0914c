pub mod diagnostic_report;
pub mod message;

use std::fmt::Write;

use colored::*;
use diagnostic_report::{Diagnostic, Severity};
use zeph_type::file::SourceMap;

pub fn render(
  diag: &Diagnostic,
  sm: &SourceMap,
) {
  print!("{}", format_diagnostic(diag, sm));
}

/// Formats `diag` with a header, the offending source line and a caret under the span.
///
/// Diagnostics on synthetic spans (no file in `sm`) get the header and notes only.
pub fn format_diagnostic(
  diag: &Diagnostic,
  sm: &SourceMap,
) -> String {
  let mut out = String::new();

  write_header(&mut out, diag);
  if sm.contains(&diag.primary_span.file) {
    write_body(&mut out, diag, sm);
  }

  for note in &diag.notes {
    writeln!(out, "  {} {}", "note:".cyan().bold(), note).unwrap();
  }

  writeln!(out).unwrap();
  out
}

fn write_header(
  out: &mut String,
  diag: &Diagnostic,
) {
  let message = diag.message.bold();
  let code = diag.error_code.bold();

  match diag.severity {
    Severity::Info => writeln!(out, "{}[{}]: {}", "Info".blue().bold(), code.blue(), message),
    Severity::Warning => writeln!(out, "{}[{}]: {}", "Warning".yellow().bold(), code.yellow(), message),
    Severity::Error => writeln!(out, "{}[{}]: {}", "Error".red().bold(), code.red().bold(), message),
    Severity::Hint => writeln!(out, "{}[{}]: {}", "Hint".cyan().bold(), code.cyan(), message),
  }
  .unwrap();
}

fn write_body(
  out: &mut String,
  diag: &Diagnostic,
  sm: &SourceMap,
) {
  let file = sm.get(&diag.primary_span.file);
  let (line, col) = sm.line_col(&diag.primary_span.file, diag.primary_span.start);
  let (end_line, end_col) = sm.line_col(&diag.primary_span.file, diag.primary_span.end);

  writeln!(
    out,
    "{:2}{} {}:{}:{}",
    "",
    "-->".blue().bold(),
    file.path.display().to_string().bold(),
    line.to_string().bold(),
    col.to_string().bold(),
  )
  .unwrap();

  let pipe = "|".blue().bold();
  let lines: Vec<&str> = file.text.lines().collect();
  let line_idx = (line as usize).saturating_sub(1);

  writeln!(out, "{:3}{:3}", "", pipe).unwrap();
  if let Some(error_line) = lines.get(line_idx) {
    writeln!(out, "{:3}{:3}{}", line.to_string().blue().bold(), pipe, error_line).unwrap();

    let span_len = if line == end_line {
      (end_col.saturating_sub(col)).max(1) as usize
    } else {
      error_line.len().saturating_sub(col as usize).max(1)
    };

    let caret = "^".repeat(span_len).red().bold();
    writeln!(out, "{:3}{:3}{}{}", "", pipe, " ".repeat((col as usize).saturating_sub(1)), caret).unwrap();
  }

  for label in &diag.labels {
    writeln!(out, "  {} {}", "label:".yellow().bold(), label.message).unwrap();
  }
}
