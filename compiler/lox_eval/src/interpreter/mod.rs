//! The tree-walking interpreter.
//!
//! Statements execute to a [`Completion`]; expressions evaluate to a
//! [`Value`]. `break` and `return` travel as completions, never as errors,
//! so every caller decides explicitly whether to stop, absorb or pass them
//! on.

mod builder;
mod call;
mod expr;
mod scope_guard;
mod stmt;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use lox_ir::ast::{Stmt, StmtKind};
use lox_ir::{SharedInterner, StringInterner, Token};
use tracing::debug;

use crate::{
    CallStack, Environment, EvalError, EvalErrorKind, LookupError, SharedPrintHandler, Value,
};

/// How a statement finished.
#[derive(Clone, Debug, PartialEq)]
pub enum Completion {
    /// Fell through to the next statement.
    Normal,
    /// A `break` looking for its loop.
    Break,
    /// A `return` looking for its function, with the returned value.
    Return(Value),
}

/// Tree-walking interpreter.
///
/// One global frame lives as long as the interpreter, so an interactive
/// session keeps its bindings across inputs, including after errors.
pub struct Interpreter {
    interner: SharedInterner,
    globals: Environment,
    /// Frame for the code currently executing.
    env: Environment,
    call_stack: CallStack,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// An interpreter printing to stdout with the default call depth.
    pub fn new(interner: SharedInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn globals(&self) -> &Environment {
        &self.globals
    }

    /// The frame currently in effect.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }

    /// Execute top-level statements in the global frame.
    ///
    /// Stops at the first runtime error. Statements that completed before
    /// the error keep their effects.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), EvalError> {
        debug!(statements = statements.len(), "interpreting");
        for stmt in statements {
            match self.execute(stmt)? {
                Completion::Normal => {}
                Completion::Break => return Err(escaped_break(stmt)),
                Completion::Return(_) => break,
            }
        }
        self.print_handler.flush();
        Ok(())
    }

    /// Map a failed frame lookup to the runtime error for `name`.
    #[cold]
    fn lookup_error(&self, error: LookupError, name: &Token) -> EvalError {
        match error {
            LookupError::Undefined => crate::errors::undefined_variable(name, &self.interner),
            LookupError::Unassigned => crate::errors::unassigned_variable(name, &self.interner),
        }
    }
}

/// Error for a `break` that reached the top level, located at the `break`
/// keyword when it can be found.
#[cold]
fn escaped_break(stmt: &Stmt) -> EvalError {
    match find_break(stmt) {
        Some(keyword) => EvalErrorKind::BreakOutsideLoop.at(keyword),
        None => EvalError::new(EvalErrorKind::BreakOutsideLoop, stmt.span, 0),
    }
}

/// The `break` keyword a statement completes with, outside of any loop.
fn find_break(stmt: &Stmt) -> Option<&Token> {
    match &stmt.kind {
        StmtKind::Break { keyword } => Some(keyword),
        StmtKind::Block(statements) => statements.iter().find_map(find_break),
        StmtKind::If {
            then_branch,
            else_branch,
            ..
        } => find_break(then_branch).or_else(|| else_branch.as_deref().and_then(find_break)),
        _ => None,
    }
}
