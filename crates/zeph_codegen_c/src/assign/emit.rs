use std::fmt::{self, Display};

use zeph_config::CHeader;

use crate::assign::keys::IndexKeys;
use crate::assign::target::AppendTarget;
use crate::context::CompilationContext;
use crate::literal::length_prefixed;

/// One call to a runtime `*_multi` update primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCall {
  pub function: &'static str,
  pub header: CHeader,
  /// Container and, for properties, the property name.
  pub leading_args: Vec<String>,
  pub rhs_holder: String,
  pub keys: IndexKeys,
  pub zts: bool,
}

impl GeneratedCall {
  pub fn new(
    target: &AppendTarget<'_>,
    rhs_holder: String,
    keys: IndexKeys,
    zts: bool,
  ) -> Self {
    Self {
      function: target.function_name(),
      header: target.runtime_header(),
      leading_args: target.leading_args(),
      rhs_holder,
      keys,
      zts,
    }
  }
}

impl Display for GeneratedCall {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    write!(f, "{}(", self.function)?;
    for arg in &self.leading_args {
      write!(f, "{}, ", arg)?;
    }

    write!(f, "&{}", self.rhs_holder)?;
    if self.zts {
      write!(f, " TSRMLS_CC")?;
    }

    write!(f, ", {}, {}", length_prefixed(&self.keys.keys()), self.keys.params())?;
    for arg in self.keys.args() {
      write!(f, ", {}", arg)?;
    }

    write!(f, ")")
  }
}

/// Writes `call` as a statement and records the header it needs.
pub fn emit_call(
  call: &GeneratedCall,
  ctx: &mut CompilationContext,
) {
  ctx.headers.add(call.header.clone());
  ctx.printer.output(&format!("{};", call));
}
