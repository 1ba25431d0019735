//! Call dispatch: arity check, call frames and stack growth.

use lox_ir::Token;
use lox_stack::ensure_sufficient_stack;
use tracing::trace;

use super::Interpreter;
use crate::{errors, CallFrame, Callable, EvalResult, Value};

impl Interpreter {
    /// Call `callee` if it is a function or class.
    pub fn call_value(&mut self, callee: &Value, arguments: Vec<Value>, paren: &Token) -> EvalResult {
        match callee {
            Value::Function(function) => self.call_callable(function.as_ref(), arguments, paren),
            Value::Class(class) => self.call_callable(class, arguments, paren),
            _ => Err(errors::not_callable(paren)),
        }
    }

    /// Check arity, push a call frame and invoke.
    ///
    /// The frame is popped whether or not the call succeeds.
    pub fn call_callable<C: Callable + ?Sized>(
        &mut self,
        callee: &C,
        arguments: Vec<Value>,
        call_site: &Token,
    ) -> EvalResult {
        let arity = callee.arity();
        if arguments.len() != arity {
            return Err(errors::arity_mismatch(arity, arguments.len(), call_site));
        }

        self.call_stack
            .push(CallFrame::new(callee.frame_name(), call_site))?;
        trace!(
            callee = callee.frame_name().unwrap_or("<anonymous>"),
            depth = self.call_stack.depth(),
            line = call_site.line,
            "call"
        );
        let result = ensure_sufficient_stack(|| callee.call(self, arguments, call_site));
        self.call_stack.pop();
        result
    }
}
