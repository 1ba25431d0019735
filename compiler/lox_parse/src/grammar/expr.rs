//! Expressions, lowest precedence first.
//!
//! ```text
//! assignment → ( call "." )? IDENT "=" assignment | logic_or
//! logic_or   → logic_and ( "or" logic_and )*
//! logic_and  → equality ( "and" equality )*
//! equality   → comparison ( ( "!=" | "==" ) comparison )*
//! comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*
//! term       → factor ( ( "-" | "+" ) factor )*
//! factor     → unary ( ( "/" | "*" ) unary )*
//! unary      → ( "!" | "-" ) unary | funcExpr
//! funcExpr   → "fun" "(" params? ")" block | call
//! call       → primary ( "(" args? ")" | "." IDENT )*
//! ```

use lox_diagnostic::ErrorCode;
use lox_ir::ast::{BinaryOp, Expr, ExprKind, LiteralValue, LogicalOp, UnaryOp};
use lox_ir::{Literal, Token, TokenKind};
use lox_stack::ensure_sufficient_stack;

use super::MAX_ARGS;
use crate::recovery::{COMPARISON_OPS, EQUALITY_OPS, FACTOR_OPS, TERM_OPS, UNARY_OPS};
use crate::{ParseError, Parser, TokenSet};

impl Parser<'_> {
    pub(crate) fn expression(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.assignment())
    }

    /// The target is parsed as an ordinary expression and validated once
    /// `=` shows up: a variable becomes `Assign`, a property read becomes
    /// `Set`, anything else is reported without aborting.
    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let target = self.logic_or()?;
        if !self.cursor.check(TokenKind::Equal) {
            return Ok(target);
        }
        let equals = self.cursor.advance();
        let value = Box::new(self.assignment()?);
        let span = target.span.merge(value.span);

        match target.kind {
            ExprKind::Variable { name } => Ok(Expr::new(ExprKind::Assign { name, value }, span)),
            ExprKind::Get { object, name } => Ok(Expr::new(
                ExprKind::Set {
                    object,
                    name,
                    value,
                },
                span,
            )),
            kind => {
                self.report_at(ErrorCode::E1003, "Invalid assignment target.", &equals);
                Ok(Expr::new(kind, target.span))
            }
        }
    }

    fn logic_or(&mut self) -> Result<Expr, ParseError> {
        self.logical(TokenKind::Or, LogicalOp::Or, Self::logic_and)
    }

    fn logic_and(&mut self) -> Result<Expr, ParseError> {
        self.logical(TokenKind::And, LogicalOp::And, Self::equality)
    }

    fn logical(
        &mut self,
        kind: TokenKind,
        op: LogicalOp,
        next: fn(&mut Self) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        let mut left = next(self)?;
        while self.cursor.check(kind) {
            let operator = self.cursor.advance();
            let right = next(self)?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Logical {
                    left: Box::new(left),
                    op,
                    operator,
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    fn equality(&mut self) -> Result<Expr, ParseError> {
        self.binary(EQUALITY_OPS, Self::comparison)
    }

    fn comparison(&mut self) -> Result<Expr, ParseError> {
        self.binary(COMPARISON_OPS, Self::term)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        self.binary(TERM_OPS, Self::factor)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        self.binary(FACTOR_OPS, Self::unary)
    }

    /// Left-associative binary level: `next ( op next )*`.
    fn binary(
        &mut self,
        ops: TokenSet,
        next: fn(&mut Self) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        let mut left = next(self)?;
        while let Some(operator) = self.cursor.eat_set(ops) {
            let op = BinaryOp::from_token_kind(operator.kind)
                .ok_or_else(|| self.operator_error(&operator))?;
            let right = next(self)?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    left: Box::new(left),
                    op,
                    operator,
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if let Some(operator) = self.cursor.eat_set(UNARY_OPS) {
            let op = UnaryOp::from_token_kind(operator.kind)
                .ok_or_else(|| self.operator_error(&operator))?;
            let operand = ensure_sufficient_stack(|| self.unary())?;
            let span = operator.span.merge(operand.span);
            return Ok(Expr::new(
                ExprKind::Unary {
                    op,
                    operator,
                    operand: Box::new(operand),
                },
                span,
            ));
        }
        self.function_expression()
    }

    fn function_expression(&mut self) -> Result<Expr, ParseError> {
        if self.cursor.check(TokenKind::Fun) && self.cursor.peek_next_kind() == TokenKind::LeftParen
        {
            let keyword = self.cursor.advance();
            let decl = self.function_rest(None, keyword.span, "function")?;
            let span = decl.span;
            return Ok(Expr::new(ExprKind::Function(decl), span));
        }
        self.call()
    }

    fn call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;
        loop {
            if self.cursor.eat(TokenKind::LeftParen) {
                expr = self.finish_call(expr)?;
            } else if self.cursor.eat(TokenKind::Dot) {
                let name = self
                    .cursor
                    .expect(TokenKind::Identifier, "Expecting property name after '.'.")?;
                let span = expr.span.merge(name.span);
                expr = Expr::new(
                    ExprKind::Get {
                        object: Box::new(expr),
                        name,
                    },
                    span,
                );
            } else {
                break;
            }
        }
        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let mut args = Vec::new();
        if !self.cursor.check(TokenKind::RightParen) {
            loop {
                if args.len() >= MAX_ARGS {
                    let token = *self.cursor.current();
                    self.report_at(
                        ErrorCode::E1004,
                        "Can't have more than 255 arguments.",
                        &token,
                    );
                }
                args.push(self.expression()?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        let paren = self
            .cursor
            .expect(TokenKind::RightParen, "Expecting ')' after arguments.")?;
        let span = callee.span.merge(paren.span);
        Ok(Expr::new(
            ExprKind::Call {
                callee: Box::new(callee),
                paren,
                args,
            },
            span,
        ))
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let token = *self.cursor.current();
        let kind = match token.kind {
            TokenKind::False => ExprKind::Literal(LiteralValue::Bool(false)),
            TokenKind::True => ExprKind::Literal(LiteralValue::Bool(true)),
            TokenKind::Nil => ExprKind::Literal(LiteralValue::Nil),
            TokenKind::Number | TokenKind::String => match token.literal {
                Some(Literal::Number(n)) => ExprKind::Literal(LiteralValue::Number(n)),
                Some(Literal::Str(s)) => ExprKind::Literal(LiteralValue::Str(s)),
                None => {
                    return Err(self.cursor.error_here(ErrorCode::E1002, "Malformed literal."));
                }
            },
            TokenKind::Identifier => ExprKind::Variable { name: token },
            TokenKind::This => {
                if !self.context.in_class() {
                    self.report_at(
                        ErrorCode::E1007,
                        "Can't use 'this' outside of a class.",
                        &token,
                    );
                }
                ExprKind::This { keyword: token }
            }
            TokenKind::Super => return self.super_expression(),
            TokenKind::LeftParen => {
                self.cursor.advance();
                let inner = self.expression()?;
                let close = self
                    .cursor
                    .expect(TokenKind::RightParen, "Expecting ')' after expression.")?;
                return Ok(Expr::new(
                    ExprKind::Grouping(Box::new(inner)),
                    token.span.merge(close.span),
                ));
            }
            _ => {
                return Err(self
                    .cursor
                    .error_here(ErrorCode::E1002, "Expecting expression.")
                    .with_context("expected expression"));
            }
        };
        self.cursor.advance();
        Ok(Expr::new(kind, token.span))
    }

    /// `"super" "." IDENT`
    fn super_expression(&mut self) -> Result<Expr, ParseError> {
        let keyword = self.cursor.advance();
        if !self.context.in_class() {
            self.report_at(
                ErrorCode::E1008,
                "Can't use 'super' outside of a class.",
                &keyword,
            );
        } else if !self.context.in_subclass() {
            self.report_at(
                ErrorCode::E1008,
                "Can't use 'super' in a class with no superclass.",
                &keyword,
            );
        }
        self.cursor
            .expect(TokenKind::Dot, "Expecting '.' after 'super'.")?;
        let method = self
            .cursor
            .expect(TokenKind::Identifier, "Expecting superclass method name.")?;
        Ok(Expr::new(
            ExprKind::Super { keyword, method },
            keyword.span.merge(method.span),
        ))
    }

    #[cold]
    fn operator_error(&self, operator: &Token) -> ParseError {
        ParseError::at_token(
            ErrorCode::E1001,
            "Expecting operator.",
            operator,
            self.cursor.interner(),
        )
    }
}
