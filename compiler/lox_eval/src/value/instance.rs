//! Class instances and property access.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use lox_ir::{Name, Token};
use rustc_hash::FxHashMap;

use super::{Class, Value};
use crate::{errors, EvalResult, Interpreter};

pub struct Instance {
    class: Rc<Class>,
    fields: RefCell<FxHashMap<Name, Value>>,
}

impl Instance {
    pub fn new(class: Rc<Class>) -> Self {
        Instance {
            class,
            fields: RefCell::new(FxHashMap::default()),
        }
    }

    fn field(&self, name: Name) -> Option<Value> {
        self.fields.borrow().get(&name).cloned()
    }

    /// Write a field. Never consults methods or getters and never fails.
    pub fn set(&self, name: Name, value: Value) {
        self.fields.borrow_mut().insert(name, value);
    }

    /// Read a property: a field wins, then a getter (invoked right away),
    /// then a method (bound, not invoked).
    pub fn get(self: &Rc<Self>, name: &Token, interpreter: &mut Interpreter) -> EvalResult {
        if let Some(value) = self.field(name.lexeme) {
            return Ok(value);
        }

        let receiver = Value::Instance(Rc::clone(self));
        if let Some(getter) = self.class.find_getter(name.lexeme) {
            let bound = getter.bind(receiver);
            return interpreter.call_callable(&bound, Vec::new(), name);
        }
        if let Some(method) = self.class.find_method(name.lexeme) {
            return Ok(Value::Function(Rc::new(method.bind(receiver))));
        }

        Err(errors::undefined_property(name, interpreter.interner()))
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} instance", self.class.name())
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("class", &self.class.name())
            .field("fields", &self.fields.borrow().len())
            .finish()
    }
}
