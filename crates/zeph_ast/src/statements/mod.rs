use serde::{Deserialize, Serialize};
use zeph_type::span::Span;

pub mod let_statement;

pub use let_statement::{ASTAssignTarget, ASTLet, ASTLetAssignment};

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ASTStatement {
  Let(ASTLet),
}

impl ASTStatement {
  pub fn span(&self) -> &Span {
    match self {
      ASTStatement::Let(stmt) => &stmt.span,
    }
  }
}
