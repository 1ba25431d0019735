//! Statements.

use lox_diagnostic::ErrorCode;
use lox_ir::ast::{Expr, ExprKind, LiteralValue, Stmt, StmtKind};
use lox_ir::TokenKind;
use lox_stack::ensure_sufficient_stack;

use crate::{ParseContext, ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn statement(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| match self.cursor.current_kind() {
            TokenKind::Print => self.print_statement(),
            TokenKind::LeftBrace => self.block_statement(),
            TokenKind::If => self.if_statement(),
            TokenKind::While => self.while_statement(),
            TokenKind::For => self.for_statement(),
            TokenKind::Break => self.break_statement(),
            TokenKind::Return => self.return_statement(),
            _ => self.expression_statement(),
        })
    }

    /// Declarations up to and including the closing `}`. The opening `{`
    /// must already be consumed.
    pub(crate) fn block_body(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();
        while !self.cursor.check(TokenKind::RightBrace) && !self.cursor.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }
        self.cursor
            .expect(TokenKind::RightBrace, "Expecting '}' after block.")?;
        Ok(statements)
    }

    fn block_statement(&mut self) -> Result<Stmt, ParseError> {
        let open = self.cursor.advance();
        let statements = self.block_body()?;
        Ok(Stmt::new(
            StmtKind::Block(statements),
            self.span_from(open.span),
        ))
    }

    fn print_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.cursor.advance();
        let value = self.expression()?;
        self.cursor
            .expect(TokenKind::Semicolon, "Expecting ';' after value.")?;
        Ok(Stmt::new(StmtKind::Print(value), self.span_from(keyword.span)))
    }

    fn expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.expression()?;
        let start = expr.span;
        self.cursor
            .expect(TokenKind::Semicolon, "Expecting ';' after expression.")?;
        Ok(Stmt::new(StmtKind::Expression(expr), self.span_from(start)))
    }

    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.cursor.advance();
        self.cursor
            .expect(TokenKind::LeftParen, "Expecting '(' after 'if'.")?;
        let condition = self.expression()?;
        self.cursor
            .expect(TokenKind::RightParen, "Expecting ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.cursor.eat(TokenKind::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::new(
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            },
            self.span_from(keyword.span),
        ))
    }

    fn while_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.cursor.advance();
        self.cursor
            .expect(TokenKind::LeftParen, "Expecting '(' after 'while'.")?;
        let condition = self.expression()?;
        self.cursor
            .expect(TokenKind::RightParen, "Expecting ')' after condition.")?;
        let body = self.loop_body()?;

        Ok(Stmt::new(
            StmtKind::While {
                condition,
                body: Box::new(body),
            },
            self.span_from(keyword.span),
        ))
    }

    /// `for (init; cond; incr) body` desugars to
    /// `{ init; while (cond) { body; incr; } }`.
    fn for_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.cursor.advance();
        self.cursor
            .expect(TokenKind::LeftParen, "Expecting '(' after 'for'.")?;

        let initializer = match self.cursor.current_kind() {
            TokenKind::Semicolon => {
                self.cursor.advance();
                None
            }
            TokenKind::Var => Some(self.var_declaration()?),
            _ => Some(self.expression_statement()?),
        };

        let condition = if self.cursor.check(TokenKind::Semicolon) {
            Expr::new(
                ExprKind::Literal(LiteralValue::Bool(true)),
                self.cursor.current_span(),
            )
        } else {
            self.expression()?
        };
        self.cursor
            .expect(TokenKind::Semicolon, "Expecting ';' after loop condition.")?;

        let increment = if self.cursor.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.cursor
            .expect(TokenKind::RightParen, "Expecting ')' after for clauses.")?;

        let mut body = self.loop_body()?;
        if let Some(increment) = increment {
            let increment_span = increment.span;
            let span = body.span.merge(increment_span);
            let increment = Stmt::new(StmtKind::Expression(increment), increment_span);
            body = Stmt::new(StmtKind::Block(vec![body, increment]), span);
        }

        let span = self.span_from(keyword.span);
        let mut desugared = Stmt::new(
            StmtKind::While {
                condition,
                body: Box::new(body),
            },
            span,
        );
        if let Some(initializer) = initializer {
            desugared = Stmt::new(StmtKind::Block(vec![initializer, desugared]), span);
        }
        Ok(desugared)
    }

    /// A statement parsed with `break` enabled.
    fn loop_body(&mut self) -> Result<Stmt, ParseError> {
        let context = self.context.with(ParseContext::IN_LOOP);
        self.with_context(context, Self::statement)
    }

    fn break_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.cursor.advance();
        if !self.context.in_loop() {
            self.report_at(
                ErrorCode::E1005,
                "Can't use 'break' outside of a loop.",
                &keyword,
            );
        }
        self.cursor
            .expect(TokenKind::Semicolon, "Expecting ';' after 'break'.")?;
        Ok(Stmt::new(
            StmtKind::Break { keyword },
            self.span_from(keyword.span),
        ))
    }

    fn return_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.cursor.advance();
        if !self.context.in_function() {
            self.report_at(
                ErrorCode::E1006,
                "Can't return from top-level code.",
                &keyword,
            );
        }
        let value = if self.cursor.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.cursor
            .expect(TokenKind::Semicolon, "Expecting ';' after return value.")?;
        Ok(Stmt::new(
            StmtKind::Return { keyword, value },
            self.span_from(keyword.span),
        ))
    }
}
