#![allow(clippy::unwrap_used)]

use super::*;
use lox_ir::StringInterner;
use pretty_assertions::assert_eq;

#[test]
fn test_define_and_get() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let env = Environment::new_global();
    env.define(x, Value::Number(42.0));
    assert_eq!(env.get(x), Ok(Value::Number(42.0)));
}

#[test]
fn test_undefined() {
    let interner = StringInterner::new();
    let env = Environment::new_global();
    assert_eq!(env.get(interner.intern("nope")), Err(LookupError::Undefined));
    assert_eq!(
        env.assign(interner.intern("nope"), Value::Nil),
        Err(LookupError::Undefined)
    );
}

#[test]
fn test_unassigned_is_not_nil() {
    let interner = StringInterner::new();
    let a = interner.intern("a");

    let env = Environment::new_global();
    env.declare(a);
    assert_eq!(env.get(a), Err(LookupError::Unassigned));

    env.assign(a, Value::Nil).unwrap();
    assert_eq!(env.get(a), Ok(Value::Nil));
}

#[test]
fn test_shadowing() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let global = Environment::new_global();
    global.define(x, Value::Number(1.0));
    let inner = global.child();
    inner.define(x, Value::Number(2.0));

    assert_eq!(inner.get(x), Ok(Value::Number(2.0)));
    assert_eq!(global.get(x), Ok(Value::Number(1.0)));
}

#[test]
fn test_unassigned_shadow_hides_outer_value() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let global = Environment::new_global();
    global.define(x, Value::Number(1.0));
    let inner = global.child();
    inner.declare(x);
    assert_eq!(inner.get(x), Err(LookupError::Unassigned));
}

#[test]
fn test_assign_writes_nearest_binding() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    let global = Environment::new_global();
    global.define(x, Value::Number(1.0));
    let inner = global.child().child();

    inner.assign(x, Value::Number(5.0)).unwrap();
    assert_eq!(global.get(x), Ok(Value::Number(5.0)));

    // Assignment never creates a binding in the inner frame.
    global.define(x, Value::Number(7.0));
    assert_eq!(inner.get(x), Ok(Value::Number(7.0)));
}

#[test]
fn test_shared_frame_sees_mutation() {
    let interner = StringInterner::new();
    let n = interner.intern("n");

    let frame = Environment::new_global();
    frame.define(n, Value::Number(0.0));
    let holder_a = frame.child();
    let holder_b = frame.child();

    holder_a.assign(n, Value::Number(3.0)).unwrap();
    assert_eq!(holder_b.get(n), Ok(Value::Number(3.0)));
}

#[test]
fn test_identity() {
    let global = Environment::new_global();
    let child = global.child();
    assert!(child.ptr_eq(&child.clone()));
    assert!(!child.ptr_eq(&global));
}
