//! Abstract syntax tree.
//!
//! Closed sum types for expressions and statements. The evaluator matches
//! on them exhaustively, so a new grammar form fails to compile until
//! every consumer handles it.
//!
//! # Module Structure
//!
//! - `expr`: Expression node and kinds
//! - `stmt`: Statement node, function and class declarations
//! - `operators`: Typed binary, unary and logical operators
//! - `printer`: Prefix-notation rendering for debugging and tests

mod expr;
mod operators;
mod printer;
mod stmt;

pub use expr::{Expr, ExprKind, LiteralValue};
pub use operators::{BinaryOp, LogicalOp, UnaryOp};
pub use printer::AstPrinter;
pub use stmt::{ClassDecl, FunctionDecl, Stmt, StmtKind};
