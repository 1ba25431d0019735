//! RAII guard for the interpreter's current frame.
//!
//! [`ScopedInterpreter`] swaps in a new frame and swaps the previous one
//! back when dropped, so the frame is restored on every exit path,
//! including `?` and unwinding.

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::Environment;

/// Interpreter running in a temporary frame.
///
/// Derefs to the interpreter; the previous frame comes back on drop.
pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
    previous: Environment,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        std::mem::swap(&mut self.interpreter.env, &mut self.previous);
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Make `frame` current until the returned guard is dropped.
    pub fn scoped(&mut self, frame: Environment) -> ScopedInterpreter<'_> {
        let previous = std::mem::replace(&mut self.env, frame);
        ScopedInterpreter {
            interpreter: self,
            previous,
        }
    }
}
