//! Declarations: classes, functions, methods, getters and variables.

use std::rc::Rc;

use lox_diagnostic::ErrorCode;
use lox_ir::ast::{ClassDecl, Expr, ExprKind, FunctionDecl, Stmt, StmtKind};
use lox_ir::{Span, Token, TokenKind};
use lox_stack::ensure_sufficient_stack;
use tracing::trace;

use super::MAX_ARGS;
use crate::{ParseError, Parser};

type Methods = Vec<Rc<FunctionDecl>>;

impl Parser<'_> {
    /// Parse one declaration, recovering from any error inside it.
    ///
    /// Returns `None` when the declaration was abandoned after an error.
    pub(crate) fn declaration(&mut self) -> Option<Stmt> {
        let result = ensure_sufficient_stack(|| match self.cursor.current_kind() {
            TokenKind::Class => self.class_declaration(),
            TokenKind::Fun if self.cursor.peek_next_kind() == TokenKind::Identifier => {
                self.fun_declaration()
            }
            TokenKind::Var => self.var_declaration(),
            _ => self.statement(),
        });
        match result {
            Ok(stmt) => Some(stmt),
            Err(error) => {
                self.recover(error);
                None
            }
        }
    }

    /// `classDecl → "class" IDENT ( "<" IDENT )? "{" ( function | getter )* "}"`
    fn class_declaration(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.cursor.advance();
        let name = self
            .cursor
            .expect(TokenKind::Identifier, "Expecting class name.")?;

        let superclass = if self.cursor.eat(TokenKind::Less) {
            let super_name = self
                .cursor
                .expect(TokenKind::Identifier, "Expecting superclass name.")?;
            if super_name.lexeme == name.lexeme {
                self.report_at(
                    ErrorCode::E1009,
                    "A class can't inherit from itself.",
                    &super_name,
                );
            }
            Some(Expr::new(
                ExprKind::Variable { name: super_name },
                super_name.span,
            ))
        } else {
            None
        };

        self.cursor
            .expect(TokenKind::LeftBrace, "Expecting '{' before class body.")?;
        let context = self.context.enter_class(superclass.is_some());
        let (methods, getters) = self.with_context(context, Self::class_body)?;
        self.cursor
            .expect(TokenKind::RightBrace, "Expecting '}' after class body.")?;

        trace!(
            class = self.cursor.interner().lookup(name.lexeme),
            methods = methods.len(),
            getters = getters.len(),
            "parsed class"
        );
        Ok(Stmt::new(
            StmtKind::Class(ClassDecl {
                name,
                superclass,
                methods,
                getters,
            }),
            self.span_from(keyword.span),
        ))
    }

    /// Members up to (not including) the closing `}`. A name followed by
    /// `(` is a method; a name followed directly by a block is a getter.
    fn class_body(&mut self) -> Result<(Methods, Methods), ParseError> {
        let mut methods = Vec::new();
        let mut getters = Vec::new();
        while !self.cursor.check(TokenKind::RightBrace) && !self.cursor.is_at_end() {
            let name = self
                .cursor
                .expect(TokenKind::Identifier, "Expecting method name.")?;
            if self.cursor.check(TokenKind::LeftBrace) {
                getters.push(self.getter_rest(name)?);
            } else {
                methods.push(self.function_rest(Some(name), name.span, "method")?);
            }
        }
        Ok((methods, getters))
    }

    /// `funDecl → "fun" IDENT "(" params? ")" block`
    fn fun_declaration(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.cursor.advance();
        let name = self
            .cursor
            .expect(TokenKind::Identifier, "Expecting function name.")?;
        let decl = self.function_rest(Some(name), keyword.span, "function")?;
        trace!(
            function = self.cursor.interner().lookup(name.lexeme),
            "parsed function"
        );
        Ok(Stmt::new(StmtKind::Function(decl), self.span_from(keyword.span)))
    }

    /// Parameter list and body, shared by named functions, methods and
    /// anonymous function expressions.
    pub(crate) fn function_rest(
        &mut self,
        name: Option<Token>,
        start: Span,
        kind: &str,
    ) -> Result<Rc<FunctionDecl>, ParseError> {
        let open_message = match name {
            Some(_) => format!("Expecting '(' after {kind} name."),
            None => "Expecting '(' after 'fun'.".to_string(),
        };
        self.cursor.expect(TokenKind::LeftParen, &open_message)?;

        let mut params = Vec::new();
        if !self.cursor.check(TokenKind::RightParen) {
            loop {
                if params.len() >= MAX_ARGS {
                    let token = *self.cursor.current();
                    self.report_at(
                        ErrorCode::E1004,
                        "Can't have more than 255 parameters.",
                        &token,
                    );
                }
                params.push(
                    self.cursor
                        .expect(TokenKind::Identifier, "Expecting parameter name.")?,
                );
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.cursor
            .expect(TokenKind::RightParen, "Expecting ')' after parameters.")?;
        self.cursor.expect(
            TokenKind::LeftBrace,
            &format!("Expecting '{{' before {kind} body."),
        )?;

        let context = self.context.enter_function();
        let body = self.with_context(context, Self::block_body)?;
        Ok(Rc::new(FunctionDecl {
            name,
            params,
            body,
            span: self.span_from(start),
        }))
    }

    /// `getter → IDENT block`
    fn getter_rest(&mut self, name: Token) -> Result<Rc<FunctionDecl>, ParseError> {
        self.cursor
            .expect(TokenKind::LeftBrace, "Expecting '{' before getter body.")?;
        let context = self.context.enter_function();
        let body = self.with_context(context, Self::block_body)?;
        Ok(Rc::new(FunctionDecl {
            name: Some(name),
            params: Vec::new(),
            body,
            span: self.span_from(name.span),
        }))
    }

    /// `varDecl → "var" IDENT ( "=" expression )? ";"`
    pub(crate) fn var_declaration(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.cursor.advance();
        let name = self
            .cursor
            .expect(TokenKind::Identifier, "Expecting variable name.")?;
        let initializer = if self.cursor.eat(TokenKind::Equal) {
            Some(self.expression()?)
        } else {
            None
        };
        self.cursor.expect(
            TokenKind::Semicolon,
            "Expecting ';' after variable declaration.",
        )?;
        Ok(Stmt::new(
            StmtKind::Var { name, initializer },
            self.span_from(keyword.span),
        ))
    }
}
