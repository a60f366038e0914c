pub mod display;
pub mod expressions;
pub mod statements;

pub use expressions::ASTExpression;
pub use statements::{ASTAssignTarget, ASTLet, ASTLetAssignment, ASTStatement};
