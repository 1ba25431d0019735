//! Values, scoping, functions and closures.

use super::{output_of, Harness};
use pretty_assertions::assert_eq;

#[test]
fn test_print_values() {
    assert_eq!(
        output_of(
            r#"
            print nil;
            print true;
            print 3.0;
            print 2.5;
            print "text";
            print "a" + "b";
            "#
        ),
        "nil\ntrue\n3\n2.5\ntext\nab\n"
    );
}

#[test]
fn test_truthiness_of_zero_and_empty_string() {
    assert_eq!(output_of(r#"if (0) print "a"; else print "b";"#), "a\n");
    assert_eq!(output_of(r#"if ("") print "a"; else print "b";"#), "a\n");
    assert_eq!(output_of(r#"if (nil) print "a"; else print "b";"#), "b\n");
    assert_eq!(output_of("print !0;"), "false\n");
}

#[test]
fn test_short_circuit_skips_right_operand() {
    let source = r#"
        fun sideEffect() { print "called"; return true; }
        print false and sideEffect();
        print true or sideEffect();
        print nil or "fallback";
        print 1 and 2;
    "#;
    assert_eq!(output_of(source), "false\ntrue\nfallback\n2\n");
}

#[test]
fn test_block_shadowing() {
    assert_eq!(
        output_of("var a = 1; { var a = 2; print a; } print a;"),
        "2\n1\n"
    );
}

#[test]
fn test_assignment_reaches_enclosing_scope() {
    assert_eq!(output_of("var a = 1; { a = 2; } print a;"), "2\n");
}

#[test]
fn test_assignment_is_an_expression() {
    assert_eq!(
        output_of("var a; var b; a = b = 3; print a; print b; print a = 4;"),
        "3\n3\n4\n"
    );
}

#[test]
fn test_declared_then_assigned() {
    assert_eq!(output_of("var a; a = nil; print a;"), "nil\n");
}

#[test]
fn test_redeclaring_global() {
    assert_eq!(output_of("var a = 1; var a = a + 1; print a;"), "2\n");
}

#[test]
fn test_closure_counter_shares_frame() {
    let source = r"
        fun makeCounter() {
            var i = 0;
            fun count() {
                i = i + 1;
                return i;
            }
            return count;
        }
        var c = makeCounter();
        print c();
        print c();
        var d = makeCounter();
        print d();
        print c();
    ";
    assert_eq!(output_of(source), "1\n2\n1\n3\n");
}

#[test]
fn test_two_closures_see_each_others_writes() {
    let source = r"
        var inc;
        var get;
        fun make() {
            var n = 0;
            fun i() { n = n + 1; }
            fun g() { return n; }
            inc = i;
            get = g;
        }
        make();
        inc();
        inc();
        print get();
    ";
    assert_eq!(output_of(source), "2\n");
}

#[test]
fn test_closure_captures_frame_not_value() {
    let source = r#"
        var a = "global";
        {
            fun show() { print a; }
            show();
            a = "changed";
            show();
        }
    "#;
    assert_eq!(output_of(source), "global\nchanged\n");
}

#[test]
fn test_functions() {
    let source = r#"
        fun add(a, b) { return a + b; }
        fun nothing() {}
        fun bare() { return; }
        print add(1, 2);
        print nothing();
        print bare();
        print add;
        print fun (x) { return x; };
        var twice = fun (f, x) { return f(f(x)); };
        print twice(fun (n) { return n * 2; }, 5);
    "#;
    assert_eq!(
        output_of(source),
        "3\nnil\nnil\n<fn add>\n<fn>\n20\n"
    );
}

#[test]
fn test_recursion() {
    let source = r"
        fun fib(n) {
            if (n < 2) return n;
            return fib(n - 1) + fib(n - 2);
        }
        print fib(15);
    ";
    assert_eq!(output_of(source), "610\n");
}

#[test]
fn test_deep_but_legal_recursion() {
    let source = r"
        fun down(n) {
            if (n == 0) return 0;
            return down(n - 1);
        }
        print down(2000);
    ";
    assert_eq!(output_of(source), "0\n");
}

#[test]
fn test_equality() {
    let source = r#"
        class A {}
        var a = A();
        fun f() {}
        print "a" == "a";
        print 1 == 1.0;
        print nil == false;
        print a == a;
        print A() == A();
        print f == f;
        print 0 == "0";
    "#;
    assert_eq!(
        output_of(source),
        "true\ntrue\nfalse\ntrue\nfalse\ntrue\nfalse\n"
    );
}

#[test]
fn test_division_by_zero() {
    assert_eq!(output_of("print 1 / 0; print -1 / 0;"), "inf\n-inf\n");
}

#[test]
fn test_bindings_persist_across_runs() {
    let mut harness = Harness::new();
    harness.run("var total = 1;").unwrap();
    harness.run("total = total + 41;").unwrap();
    harness.run("print total;").unwrap();
    assert_eq!(harness.take_output(), "42\n");
}
