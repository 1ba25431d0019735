//! Lexical scope frames.
//!
//! Frames form a tree rooted at the global frame. Blocks, calls and method
//! binding each create one child frame. A frame is shared by every closure
//! created inside it, so a write through one holder is seen by all.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use lox_ir::Name;

use crate::Value;

/// A single-threaded shared cell for scope frames.
///
/// All frame allocations go through [`LocalScope::new`].
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether both handles point at the same frame.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Why a lookup or assignment failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupError {
    /// No frame in the chain binds the name.
    Undefined,
    /// The nearest binding was declared without a value and never assigned.
    Unassigned,
}

/// A variable slot.
#[derive(Clone, Debug)]
enum Binding {
    Unassigned,
    Value(Value),
}

/// One frame: bindings plus a link to the enclosing frame.
#[derive(Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Binding>,
    parent: Option<Environment>,
}

/// Handle to a scope frame.
#[derive(Clone, Debug)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// A root frame with no parent.
    pub fn new_global() -> Self {
        Environment(LocalScope::new(Scope::default()))
    }

    /// A fresh frame enclosed by this one.
    #[must_use]
    pub fn child(&self) -> Self {
        Environment(LocalScope::new(Scope {
            bindings: FxHashMap::default(),
            parent: Some(self.clone()),
        }))
    }

    /// Bind `name` in this frame, replacing any binding it already has here.
    pub fn define(&self, name: Name, value: Value) {
        self.0.borrow_mut().bindings.insert(name, Binding::Value(value));
    }

    /// Bind `name` in this frame to the unassigned marker.
    pub fn declare(&self, name: Name) {
        self.0.borrow_mut().bindings.insert(name, Binding::Unassigned);
    }

    /// Read the nearest binding of `name`.
    pub fn get(&self, name: Name) -> Result<Value, LookupError> {
        let mut frame = self.clone();
        loop {
            let parent = {
                let scope = frame.0.borrow();
                match scope.bindings.get(&name) {
                    Some(Binding::Value(value)) => return Ok(value.clone()),
                    Some(Binding::Unassigned) => return Err(LookupError::Unassigned),
                    None => scope.parent.clone(),
                }
            };
            match parent {
                Some(parent) => frame = parent,
                None => return Err(LookupError::Undefined),
            }
        }
    }

    /// Overwrite the nearest existing binding of `name`.
    ///
    /// Never creates a binding. Assigning an unassigned slot is how a
    /// declared variable gets its first value.
    pub fn assign(&self, name: Name, value: Value) -> Result<(), LookupError> {
        let mut frame = self.clone();
        loop {
            let parent = {
                let mut scope = frame.0.borrow_mut();
                if let Some(slot) = scope.bindings.get_mut(&name) {
                    *slot = Binding::Value(value);
                    return Ok(());
                }
                scope.parent.clone()
            };
            match parent {
                Some(parent) => frame = parent,
                None => return Err(LookupError::Undefined),
            }
        }
    }

    /// Whether both handles point at the same frame.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

#[cfg(test)]
mod tests;
