pub mod assign;
pub mod context;
pub mod expr;
pub mod headers;
pub mod literal;
pub mod printer;
pub mod statements;

pub use assign::emit::GeneratedCall;
pub use assign::target::AppendTarget;
pub use assign::{compile_append, compile_assignment, compile_let};
pub use context::CompilationContext;
pub use expr::{ExpressionCompiler, ExpressionResolver, ResolvedValue};
pub use statements::{compile_statements, compile_statements_with};
