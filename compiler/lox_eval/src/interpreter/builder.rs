//! `InterpreterBuilder` for creating configured interpreters.

use lox_ir::SharedInterner;

use super::Interpreter;
use crate::{stdout_handler, CallStack, Environment, SharedPrintHandler, DEFAULT_MAX_DEPTH};

/// Builder for [`Interpreter`].
///
/// Defaults: output to stdout, a fresh global frame, and a call depth
/// limit of [`DEFAULT_MAX_DEPTH`].
pub struct InterpreterBuilder {
    interner: SharedInterner,
    globals: Option<Environment>,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: usize,
}

impl InterpreterBuilder {
    pub fn new(interner: SharedInterner) -> Self {
        InterpreterBuilder {
            interner,
            globals: None,
            print_handler: None,
            max_call_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Where `print` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Deepest allowed call nesting before a stack overflow error.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Start from an existing global frame instead of an empty one.
    #[must_use]
    pub fn globals(mut self, globals: Environment) -> Self {
        self.globals = Some(globals);
        self
    }

    pub fn build(self) -> Interpreter {
        let globals = self.globals.unwrap_or_else(Environment::new_global);
        Interpreter {
            interner: self.interner,
            env: globals.clone(),
            globals,
            call_stack: CallStack::new(self.max_call_depth),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        }
    }
}
