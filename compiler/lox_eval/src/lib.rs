//! Tree-walking evaluator for Lox.
//!
//! # Architecture
//!
//! - [`Environment`]: chain of shared scope frames; closures hold a frame
//!   and see every later mutation made through it
//! - [`Value`]: runtime values, with [`Function`], [`Class`] and
//!   [`Instance`] as the object model behind the [`Callable`] trait
//! - [`Interpreter`]: executes statements to a [`Completion`] and
//!   evaluates expressions to values
//! - [`CallStack`]: bounded call frames so runaway recursion becomes an
//!   ordinary runtime error
//!
//! Errors are [`EvalError`] values; nothing in this crate panics on user
//! input.

mod call_stack;
mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod value;

pub use call_stack::{CallFrame, CallStack, DEFAULT_MAX_DEPTH};
pub use environment::{Environment, LocalScope, LookupError, Scope};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Completion, Interpreter, InterpreterBuilder, ScopedInterpreter};
pub use operators::{evaluate_binary, evaluate_unary};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::{Callable, Class, Function, Instance, MethodTable, Value};

#[cfg(test)]
mod tests;
