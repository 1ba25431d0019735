//! Statement types.

use std::fmt;
use std::rc::Rc;

use super::Expr;
use crate::{Span, Token};

/// Statement node.
#[derive(Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Statement kinds.
///
/// There is no `for` variant: the parser desugars `for` into a block
/// holding the initializer and a `While`.
#[derive(Clone, PartialEq, Debug)]
pub enum StmtKind {
    /// Expression evaluated for its side effects.
    Expression(Expr),

    Print(Expr),

    /// `var name (= initializer)?;`
    ///
    /// Without an initializer the binding starts out unassigned, not nil.
    Var {
        name: Token,
        initializer: Option<Expr>,
    },

    Block(Vec<Stmt>),

    Function(Rc<FunctionDecl>),

    Class(ClassDecl),

    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },

    While {
        condition: Expr,
        body: Box<Stmt>,
    },

    Break {
        keyword: Token,
    },

    Return {
        keyword: Token,
        value: Option<Expr>,
    },
}

/// A function, method or getter declaration.
///
/// Shared through `Rc` so every runtime function built from this
/// declaration (including each bound method) points at the same node.
#[derive(Clone, PartialEq, Debug)]
pub struct FunctionDecl {
    /// `None` for anonymous function expressions.
    pub name: Option<Token>,
    /// Always empty for getters.
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// `class Name (< Superclass)? { methods and getters }`
#[derive(Clone, PartialEq, Debug)]
pub struct ClassDecl {
    pub name: Token,
    /// Always an `ExprKind::Variable` when present.
    pub superclass: Option<Expr>,
    pub methods: Vec<Rc<FunctionDecl>>,
    pub getters: Vec<Rc<FunctionDecl>>,
}
