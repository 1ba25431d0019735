//! Call frame tracking with a depth limit.

use lox_ir::{Span, Token};
use tracing::debug;

use crate::errors::{self, EvalError};

/// Default maximum call depth.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// A single active call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    /// Callee name; `None` for anonymous functions.
    pub name: Option<&'static str>,
    /// Line of the call site.
    pub line: u32,
    pub span: Span,
}

impl CallFrame {
    pub fn new(name: Option<&'static str>, call_site: &Token) -> Self {
        CallFrame {
            name,
            line: call_site.line,
            span: call_site.span,
        }
    }
}

/// Live call stack for the interpreter.
///
/// Each call pushes a frame and pops it on the way out, error or not.
/// Pushing past `max_depth` fails with a stack overflow error and leaves
/// the stack unchanged.
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: usize,
}

impl CallStack {
    pub fn new(max_depth: usize) -> Self {
        CallStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if self.frames.len() >= self.max_depth {
            debug!(callee = frame.name.unwrap_or("<fn>"), line = frame.line, "call stack overflow");
            return Err(errors::stack_overflow(self.max_depth, frame.span, frame.line));
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(!self.frames.is_empty(), "CallStack::pop on empty stack");
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}
