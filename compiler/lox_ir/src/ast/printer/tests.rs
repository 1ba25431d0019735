use super::*;
use crate::ast::{BinaryOp, UnaryOp};
use crate::{Span, TokenKind};
use pretty_assertions::assert_eq;

fn token(interner: &StringInterner, kind: TokenKind, text: &str) -> Token {
    Token::new(kind, interner.intern(text), None, 1, Span::DUMMY)
}

fn number(n: f64) -> Expr {
    Expr::new(ExprKind::Literal(LiteralValue::Number(n)), Span::DUMMY)
}

fn binary(interner: &StringInterner, left: Expr, op: BinaryOp, right: Expr) -> Expr {
    let kind = match op {
        BinaryOp::Add => TokenKind::Plus,
        BinaryOp::Mul => TokenKind::Star,
        _ => TokenKind::Minus,
    };
    Expr::new(
        ExprKind::Binary {
            left: Box::new(left),
            op,
            operator: token(interner, kind, op.as_symbol()),
            right: Box::new(right),
        },
        Span::DUMMY,
    )
}

#[test]
fn test_nested_binary() {
    let interner = StringInterner::new();
    let product = binary(&interner, number(2.0), BinaryOp::Mul, number(3.0));
    let sum = binary(&interner, number(1.0), BinaryOp::Add, product);
    assert_eq!(AstPrinter::new(&interner).print_expr(&sum), "(+ 1 (* 2 3))");
}

#[test]
fn test_unary_and_grouping() {
    let interner = StringInterner::new();
    let neg = Expr::new(
        ExprKind::Unary {
            op: UnaryOp::Neg,
            operator: token(&interner, TokenKind::Minus, "-"),
            operand: Box::new(number(1.5)),
        },
        Span::DUMMY,
    );
    let group = Expr::new(ExprKind::Grouping(Box::new(neg)), Span::DUMMY);
    assert_eq!(
        AstPrinter::new(&interner).print_expr(&group),
        "(group (- 1.5))"
    );
}

#[test]
fn test_var_statements() {
    let interner = StringInterner::new();
    let name = token(&interner, TokenKind::Identifier, "a");
    let declared = Stmt::new(
        StmtKind::Var {
            name,
            initializer: None,
        },
        Span::DUMMY,
    );
    let string = interner.intern("hi");
    let initialized = Stmt::new(
        StmtKind::Var {
            name,
            initializer: Some(Expr::new(
                ExprKind::Literal(LiteralValue::Str(string)),
                Span::DUMMY,
            )),
        },
        Span::DUMMY,
    );
    let printer = AstPrinter::new(&interner);
    assert_eq!(
        printer.print_program(&[declared, initialized]),
        "(var a)\n(var a \"hi\")"
    );
}
