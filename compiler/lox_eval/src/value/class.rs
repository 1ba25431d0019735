//! Classes: method tables, single inheritance and construction.

use std::fmt;
use std::rc::Rc;

use lox_ir::{Name, Token};
use rustc_hash::FxHashMap;

use super::{Callable, Function, Instance, Value};
use crate::{EvalResult, Interpreter};

/// Method or getter table. Fixed once the class is built.
pub type MethodTable = FxHashMap<Name, Rc<Function>>;

pub struct Class {
    name: &'static str,
    superclass: Option<Rc<Class>>,
    methods: MethodTable,
    getters: MethodTable,
}

impl Class {
    pub fn new(
        name: &'static str,
        superclass: Option<Rc<Class>>,
        methods: MethodTable,
        getters: MethodTable,
    ) -> Self {
        Class {
            name,
            superclass,
            methods,
            getters,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Look up a method here, then up the superclass chain.
    pub fn find_method(&self, name: Name) -> Option<Rc<Function>> {
        self.find_in(name, |class| &class.methods)
    }

    /// Look up a getter here, then up the superclass chain.
    pub fn find_getter(&self, name: Name) -> Option<Rc<Function>> {
        self.find_in(name, |class| &class.getters)
    }

    fn find_in(&self, name: Name, table: impl Fn(&Class) -> &MethodTable) -> Option<Rc<Function>> {
        let mut class = self;
        loop {
            if let Some(found) = table(class).get(&name) {
                return Some(Rc::clone(found));
            }
            class = class.superclass.as_deref()?;
        }
    }
}

impl Callable for Rc<Class> {
    /// The arity of `init`, or zero without one.
    fn arity(&self) -> usize {
        self.find_method(Name::INIT)
            .map_or(0, |initializer| initializer.arity())
    }

    /// Construct an instance and run `init` on it. The initializer's
    /// result is discarded; construction always yields the instance.
    fn call(
        &self,
        interpreter: &mut Interpreter,
        arguments: Vec<Value>,
        call_site: &Token,
    ) -> EvalResult {
        let instance = Value::Instance(Rc::new(Instance::new(Rc::clone(self))));
        if let Some(initializer) = self.find_method(Name::INIT) {
            initializer
                .bind(instance.clone())
                .call(interpreter, arguments, call_site)?;
        }
        Ok(instance)
    }

    fn frame_name(&self) -> Option<&'static str> {
        Some(self.name)
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.name)
            .field("superclass", &self.superclass.as_ref().map(|s| s.name))
            .field("methods", &self.methods.len())
            .field("getters", &self.getters.len())
            .finish()
    }
}
