//! Runtime values and the object model.

mod class;
mod function;
mod instance;

pub use class::{Class, MethodTable};
pub use function::Function;
pub use instance::Instance;

use std::fmt;
use std::rc::Rc;

use lox_ir::Token;

use crate::{EvalResult, Interpreter};

/// Anything that can appear as the callee of a call expression.
pub trait Callable {
    /// Exact number of arguments a call must supply.
    fn arity(&self) -> usize;

    /// Invoke with arguments already checked against [`Callable::arity`].
    ///
    /// `call_site` locates errors raised by the call itself.
    fn call(
        &self,
        interpreter: &mut Interpreter,
        arguments: Vec<Value>,
        call_site: &Token,
    ) -> EvalResult;

    /// Name shown in call frames; `None` for anonymous functions.
    fn frame_name(&self) -> Option<&'static str>;
}

/// A runtime value.
///
/// Strings are immutable and shared. Functions, classes and instances are
/// reference types: copies alias the same object.
#[derive(Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(f64),
    Str(Rc<str>),
    Function(Rc<Function>),
    Class(Rc<Class>),
    Instance(Rc<Instance>),
}

impl Value {
    pub fn string(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }

    /// `nil` and `false` are falsy; everything else is truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }
}

impl PartialEq for Value {
    /// Values of different types are never equal. Numbers compare by IEEE
    /// value, strings by content, objects by identity.
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Class(a), Value::Class(b)) => Rc::ptr_eq(a, b),
            (Value::Instance(a), Value::Instance(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{b}"),
            // f64's Display already drops the fraction of integral values
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Function(function) => write!(f, "{function}"),
            Value::Class(class) => write!(f, "{}", class.name()),
            Value::Instance(instance) => write!(f, "{instance}"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "Nil"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Number(n) => write!(f, "Number({n})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::Function(function) => write!(f, "Function({function})"),
            Value::Class(class) => write!(f, "Class({})", class.name()),
            Value::Instance(instance) => write!(f, "Instance({instance})"),
        }
    }
}
