//! Expression types.

use std::fmt;
use std::rc::Rc;

use super::{BinaryOp, FunctionDecl, LogicalOp, UnaryOp};
use crate::{Name, Span, Token};

/// Expression node.
#[derive(Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Literal values that can appear directly in source.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum LiteralValue {
    Nil,
    Bool(bool),
    Number(f64),
    Str(Name),
}

/// Expression kinds.
#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    Literal(LiteralValue),

    /// Parenthesized expression: `(inner)`
    Grouping(Box<Expr>),

    Unary {
        op: UnaryOp,
        operator: Token,
        operand: Box<Expr>,
    },

    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        operator: Token,
        right: Box<Expr>,
    },

    /// `and` / `or`. Kept apart from `Binary` because the right operand
    /// is evaluated conditionally.
    Logical {
        left: Box<Expr>,
        op: LogicalOp,
        operator: Token,
        right: Box<Expr>,
    },

    Variable {
        name: Token,
    },

    Assign {
        name: Token,
        value: Box<Expr>,
    },

    /// `callee(args)`. `paren` is the closing parenthesis, used to report
    /// arity and callability errors.
    Call {
        callee: Box<Expr>,
        paren: Token,
        args: Vec<Expr>,
    },

    /// Property read: `object.name`
    Get {
        object: Box<Expr>,
        name: Token,
    },

    /// Property write: `object.name = value`
    Set {
        object: Box<Expr>,
        name: Token,
        value: Box<Expr>,
    },

    This {
        keyword: Token,
    },

    /// `super.method`
    Super {
        keyword: Token,
        method: Token,
    },

    /// Anonymous function literal: `fun (params) { body }`
    Function(Rc<FunctionDecl>),
}
