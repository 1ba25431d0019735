//! Classes, instances, getters and inheritance.

use super::{error_of, output_of};
use crate::EvalErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn test_class_and_instance_display() {
    let source = r"
        class Point {
            init(x) { this.x = x; }
            getX() { return this.x; }
        }
        var p = Point(1);
        print Point;
        print p;
        print p.getX;
    ";
    assert_eq!(output_of(source), "Point\nPoint instance\n<fn getX>\n");
}

#[test]
fn test_fields() {
    let source = r"
        class Box {}
        var b = Box();
        b.value = 1;
        b.value = b.value + 1;
        print b.value;
        print b.other = 3;
    ";
    assert_eq!(output_of(source), "2\n3\n");
}

#[test]
fn test_init_always_returns_instance() {
    let source = r"
        class P {
            init(x) {
                this.x = x;
                return 7;
            }
        }
        var p = P(3);
        print p.x;
        print p.init(5) == p;
        print p.x;
    ";
    assert_eq!(output_of(source), "3\ntrue\n5\n");
}

#[test]
fn test_bare_return_in_init() {
    let source = r#"
        class Early {
            init(flag) {
                this.state = "start";
                if (flag) return;
                this.state = "end";
            }
        }
        print Early(true).state;
        print Early(false).state;
    "#;
    assert_eq!(output_of(source), "start\nend\n");
}

#[test]
fn test_getter_is_invoked_on_access() {
    let source = r"
        class Circle {
            init(radius) { this.radius = radius; }
            area { return 3 * this.radius * this.radius; }
        }
        var c = Circle(2);
        print c.area;
        c.radius = 3;
        print c.area;
    ";
    assert_eq!(output_of(source), "12\n27\n");
}

#[test]
fn test_getter_result_is_not_the_getter() {
    let source = r"
        class Circle {
            area { return 12; }
        }
        Circle().area();
    ";
    assert_eq!(error_of(source).kind, EvalErrorKind::NotCallable);
}

#[test]
fn test_getter_returning_function_can_be_called() {
    let source = r#"
        class Greeter {
            hello { return fun () { return "hello"; }; }
        }
        print Greeter().hello();
    "#;
    assert_eq!(output_of(source), "hello\n");
}

#[test]
fn test_property_precedence() {
    let source = r#"
        class A {
            m() { return "method"; }
            g { return "getter"; }
        }
        var a = A();
        print a.m();
        print a.g;
        a.m = "field";
        a.g = "field too";
        print a.m;
        print a.g;
    "#;
    assert_eq!(output_of(source), "method\ngetter\nfield\nfield too\n");
}

#[test]
fn test_bound_method_remembers_receiver() {
    let source = r#"
        class Person {
            init(name) { this.name = name; }
            greet() { return "I am " + this.name; }
        }
        var greet = Person("Ada").greet;
        var other = Person("Bob");
        other.greet = greet;
        print greet();
        print other.greet();
    "#;
    assert_eq!(output_of(source), "I am Ada\nI am Ada\n");
}

#[test]
fn test_this_in_nested_function() {
    let source = r#"
        class Thing {
            init() { this.name = "thing"; }
            callback() {
                fun inner() { return this.name; }
                return inner;
            }
        }
        print Thing().callback()();
    "#;
    assert_eq!(output_of(source), "thing\n");
}

#[test]
fn test_inherited_method_sees_subclass_this() {
    let source = r"
        class A {
            name() { return 1; }
            who() { return this.name(); }
        }
        class B < A {
            name() { return 2; }
        }
        print B().who();
        print A().who();
    ";
    assert_eq!(output_of(source), "2\n1\n");
}

#[test]
fn test_inherited_init_and_arity() {
    let source = r"
        class A {
            init(a, b) { this.sum = a + b; }
        }
        class B < A {}
        print B(1, 2).sum;
    ";
    assert_eq!(output_of(source), "3\n");
}

#[test]
fn test_super_method_call() {
    let source = r#"
        class A {
            greet() { return "A"; }
        }
        class B < A {
            greet() { return super.greet() + "B"; }
        }
        class C < B {
            greet() { return super.greet() + "C"; }
        }
        print C().greet();
    "#;
    assert_eq!(output_of(source), "ABC\n");
}

#[test]
fn test_super_binds_current_this() {
    let source = r#"
        class A {
            describe() { return "I am " + this.kind; }
        }
        class B < A {
            init() { this.kind = "B"; }
            describe() { return super.describe() + "!"; }
        }
        print B().describe();
    "#;
    assert_eq!(output_of(source), "I am B!\n");
}

#[test]
fn test_super_starts_at_defining_class() {
    let source = r#"
        class A {
            method() { return "A"; }
        }
        class B < A {
            method() { return "B"; }
            test() { return super.method(); }
        }
        class C < B {}
        print C().test();
    "#;
    assert_eq!(output_of(source), "A\n");
}

#[test]
fn test_getters_inherit_and_super() {
    let source = r"
        class A {
            value { return 1; }
        }
        class B < A {
            value { return super.value + 10; }
        }
        class C < A {}
        print B().value;
        print C().value;
    ";
    assert_eq!(output_of(source), "11\n1\n");
}

#[test]
fn test_class_refers_to_itself_in_methods() {
    let source = r"
        class Node {
            init(depth) { this.depth = depth; }
            child() { return Node(this.depth + 1); }
        }
        print Node(0).child().child().depth;
    ";
    assert_eq!(output_of(source), "2\n");
}

#[test]
fn test_methods_are_fresh_bindings() {
    let source = r"
        class A { m() {} }
        var a = A();
        print a.m == a.m;
    ";
    assert_eq!(output_of(source), "false\n");
}
