//! Core parser tests.

use super::print_program;
use pretty_assertions::assert_eq;

#[test]
fn test_precedence() {
    assert_eq!(print_program("1 + 2 * 3;"), "(; (+ 1 (* 2 3)))");
    assert_eq!(print_program("(1 + 2) * 3;"), "(; (* (group (+ 1 2)) 3))");
    assert_eq!(
        print_program("1 < 2 == 3 >= 4;"),
        "(; (== (< 1 2) (>= 3 4)))"
    );
}

#[test]
fn test_left_associativity() {
    assert_eq!(print_program("2 - 3 - 1;"), "(; (- (- 2 3) 1))");
    assert_eq!(print_program("8 / 4 / 2;"), "(; (/ (/ 8 4) 2))");
}

#[test]
fn test_logical_below_equality() {
    assert_eq!(
        print_program("a or b and c == d;"),
        "(; (or a (and b (== c d))))"
    );
    assert_eq!(print_program("a and b and c;"), "(; (and (and a b) c))");
}

#[test]
fn test_unary_nests() {
    assert_eq!(print_program("!-x;"), "(; (! (- x)))");
    assert_eq!(print_program("--1;"), "(; (- (- 1)))");
}

#[test]
fn test_assignment_is_right_associative() {
    assert_eq!(print_program("a = b = 1;"), "(; (= a (= b 1)))");
}

#[test]
fn test_property_set_and_get() {
    assert_eq!(print_program("a.b.c = 1;"), "(; (= (. (. a b) c) 1))");
    assert_eq!(print_program("a.b().c;"), "(; (. (call (. a b)) c))");
}

#[test]
fn test_calls_chain() {
    assert_eq!(print_program("f(1, 2)(3);"), "(; (call (call f 1 2) 3))");
    assert_eq!(print_program("f();"), "(; (call f))");
}

#[test]
fn test_literals() {
    assert_eq!(
        print_program("print \"hi\"; print nil; print true; print 1.5;"),
        "(print \"hi\")\n(print nil)\n(print true)\n(print 1.5)"
    );
}

#[test]
fn test_var_and_block() {
    assert_eq!(
        print_program("var a; var b = 2; { var a = 3; print a; }"),
        "(var a)\n(var b 2)\n(block (var a 3) (print a))"
    );
}

#[test]
fn test_if_else_binds_nearest() {
    assert_eq!(
        print_program("if (a) if (b) print 1; else print 2;"),
        "(if a (if b (print 1) (print 2)))"
    );
}

#[test]
fn test_while() {
    assert_eq!(
        print_program("while (x < 3) x = x + 1;"),
        "(while (< x 3) (; (= x (+ x 1))))"
    );
}

#[test]
fn test_for_desugars_to_while() {
    assert_eq!(
        print_program("for (var i = 0; i < 3; i = i + 1) print i;"),
        "(block (var i 0) (while (< i 3) (block (print i) (; (= i (+ i 1))))))"
    );
}

#[test]
fn test_for_without_clauses() {
    assert_eq!(print_program("for (;;) break;"), "(while true (break))");
    assert_eq!(
        print_program("for (i = 0; i < 1;) i = 1;"),
        "(block (; (= i 0)) (while (< i 1) (; (= i 1))))"
    );
}

#[test]
fn test_functions() {
    assert_eq!(
        print_program("fun add(a, b) { return a + b; }"),
        "(fun add (a b) (return (+ a b)))"
    );
    assert_eq!(
        print_program("var f = fun (x) { return x; };"),
        "(var f (fun (x) (return x)))"
    );
    assert_eq!(print_program("fun f() { return; }"), "(fun f () (return))");
}

#[test]
fn test_class_with_getter_and_superclass() {
    assert_eq!(
        print_program(
            "class Square < Shape { init(s) { this.s = s; } area { return this.s * this.s; } }"
        ),
        "(class Square < Shape \
         (fun init (s) (; (= (. this s) s))) \
         (get area () (return (* (. this s) (. this s)))))"
    );
}

#[test]
fn test_super_call() {
    assert_eq!(
        print_program("class A < B { m() { return super.m(); } }"),
        "(class A < B (fun m () (return (call (super m)))))"
    );
}

#[test]
fn test_this_in_nested_function_inside_method() {
    assert_eq!(
        print_program("class A { m() { fun g() { return this; } } }"),
        "(class A (fun m () (fun g () (return this))))"
    );
}

#[test]
fn test_break_inside_nested_block_of_loop() {
    assert_eq!(
        print_program("while (true) { if (x) break; }"),
        "(while true (block (if x (break))))"
    );
}

#[test]
fn test_deeply_nested_groups() {
    let depth = 1_000;
    let source = format!("{}1{};", "(".repeat(depth), ")".repeat(depth));
    let printed = print_program(&source);
    assert!(printed.starts_with("(; (group (group"));
}
