//! Grammar productions, split by syntactic category.
//!
//! ```text
//! declaration → classDecl | funDecl | varDecl | statement
//! statement   → exprStmt | printStmt | block | ifStmt | whileStmt
//!             | forStmt | breakStmt | returnStmt
//! expression  → assignment
//! ```
//!
//! Productions that can fail return `Result`; the error unwinds to the
//! nearest `declaration`, which records it and synchronizes. Static checks
//! (misplaced `break`, `return`, `this`, `super`) are reported without
//! unwinding.

mod decl;
mod expr;
mod stmt;

/// Maximum number of call arguments or function parameters.
pub(crate) const MAX_ARGS: usize = 255;
