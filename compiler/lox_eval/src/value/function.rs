//! User functions, methods and bound methods.

use std::fmt;
use std::rc::Rc;

use lox_ir::ast::FunctionDecl;
use lox_ir::{Name, Token};

use super::{Callable, Value};
use crate::{Completion, Environment, EvalErrorKind, EvalResult, Interpreter};

/// A function value: a declaration paired with the frame it closes over.
///
/// Many `Function`s may share one declaration (every bound copy of a method
/// does) and many may share one closure frame.
pub struct Function {
    name: Option<&'static str>,
    declaration: Rc<FunctionDecl>,
    closure: Environment,
    is_initializer: bool,
}

impl Function {
    pub fn new(
        name: Option<&'static str>,
        declaration: Rc<FunctionDecl>,
        closure: Environment,
        is_initializer: bool,
    ) -> Self {
        Function {
            name,
            declaration,
            closure,
            is_initializer,
        }
    }

    /// A copy whose closure is a fresh frame binding `this` to `instance`.
    ///
    /// Neither `self` nor the instance is modified.
    #[must_use]
    pub fn bind(&self, instance: Value) -> Function {
        let frame = self.closure.child();
        frame.define(Name::THIS, instance);
        Function {
            name: self.name,
            declaration: Rc::clone(&self.declaration),
            closure: frame,
            is_initializer: self.is_initializer,
        }
    }
}

impl Callable for Function {
    fn arity(&self) -> usize {
        self.declaration.params.len()
    }

    fn call(
        &self,
        interpreter: &mut Interpreter,
        arguments: Vec<Value>,
        call_site: &Token,
    ) -> EvalResult {
        let frame = self.closure.child();
        for (param, argument) in self.declaration.params.iter().zip(arguments) {
            frame.define(param.lexeme, argument);
        }

        let completion = interpreter.execute_block(&self.declaration.body, frame)?;
        if let Completion::Break = completion {
            return Err(EvalErrorKind::BreakOutsideLoop.at(call_site));
        }
        if self.is_initializer {
            // `this` lives in the bound frame, one level above the body
            return Ok(self.closure.get(Name::THIS).unwrap_or(Value::Nil));
        }
        match completion {
            Completion::Return(value) => Ok(value),
            Completion::Normal | Completion::Break => Ok(Value::Nil),
        }
    }

    fn frame_name(&self) -> Option<&'static str> {
        self.name
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => write!(f, "<fn {name}>"),
            None => write!(f, "<fn>"),
        }
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("arity", &self.arity())
            .field("is_initializer", &self.is_initializer)
            .finish_non_exhaustive()
    }
}
