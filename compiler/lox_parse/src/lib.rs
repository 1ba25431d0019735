//! Recursive descent parser for Lox.
//!
//! Produces a tree of [`Stmt`]s from a [`TokenList`]. Syntax errors never
//! stop the parse: each is recorded, the parser synchronizes to the next
//! statement boundary, and parsing resumes, so one pass reports every
//! independent error. A tree with errors must not be evaluated.

mod context;
mod cursor;
mod error;
mod grammar;
mod recovery;

pub use context::ParseContext;
pub use cursor::Cursor;
pub use error::{ErrorLocation, ParseError};
pub use recovery::{synchronize, TokenSet};

use lox_diagnostic::ErrorCode;
use lox_ir::ast::{Expr, Stmt};
use lox_ir::{Span, StringInterner, Token, TokenList};
use recovery::{NON_EXPR_STMT_START, STMT_START};
use tracing::{debug, trace};

/// Result of parsing a program.
#[derive(Debug)]
pub struct ParseOutput {
    pub statements: Vec<Stmt>,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// What an interactive input turned out to be.
#[derive(Debug)]
pub enum Interactive {
    /// Statements to execute.
    Program(Vec<Stmt>),
    /// A lone expression with no trailing `;`, whose value gets printed.
    Expression(Expr),
}

/// Result of parsing one interactive input.
#[derive(Debug)]
pub struct InteractiveOutput {
    pub input: Interactive,
    pub errors: Vec<ParseError>,
}

impl InteractiveOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Saved parser state for speculative parsing.
#[derive(Clone, Copy)]
struct ParserSnapshot {
    position: usize,
    error_count: usize,
    context: ParseContext,
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    errors: Vec<ParseError>,
    context: ParseContext,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            errors: Vec::new(),
            context: ParseContext::NONE,
        }
    }

    /// `program → declaration* EOF`
    pub fn parse_program(mut self) -> ParseOutput {
        let statements = self.declarations_until_end();
        debug!(
            statements = statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        ParseOutput {
            statements,
            errors: self.errors,
        }
    }

    /// Parse either a lone expression or a program.
    ///
    /// The expression form is chosen only when the whole input is exactly
    /// one expression with no trailing `;`. Anything else is re-parsed from
    /// the start as a program.
    pub fn parse_interactive(mut self) -> InteractiveOutput {
        if !self.cursor.is_at_end() && !self.cursor.check_set(NON_EXPR_STMT_START) {
            let snapshot = self.snapshot();
            match self.expression() {
                Ok(expr) if self.cursor.is_at_end() && self.errors.is_empty() => {
                    trace!("interactive input is a bare expression");
                    return InteractiveOutput {
                        input: Interactive::Expression(expr),
                        errors: self.errors,
                    };
                }
                _ => self.restore(snapshot),
            }
        }

        let statements = self.declarations_until_end();
        InteractiveOutput {
            input: Interactive::Program(statements),
            errors: self.errors,
        }
    }

    fn declarations_until_end(&mut self) -> Vec<Stmt> {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }
        statements
    }

    fn snapshot(&self) -> ParserSnapshot {
        ParserSnapshot {
            position: self.cursor.position(),
            error_count: self.errors.len(),
            context: self.context,
        }
    }

    fn restore(&mut self, snapshot: ParserSnapshot) {
        self.cursor.set_position(snapshot.position);
        self.errors.truncate(snapshot.error_count);
        self.context = snapshot.context;
    }

    /// Record an error that does not abort the current statement.
    fn report(&mut self, error: ParseError) {
        trace!(message = %error.message, line = error.line, "parse error");
        self.errors.push(error);
    }

    /// Record an error located at `token` without aborting.
    fn report_at(&mut self, code: ErrorCode, message: &str, token: &Token) {
        let error = ParseError::at_token(code, message, token, self.cursor.interner());
        self.report(error);
    }

    /// Record an aborting error and skip to the next statement boundary.
    fn recover(&mut self, error: ParseError) {
        self.report(error);
        synchronize(&mut self.cursor, STMT_START);
    }

    /// Run `f` with a different parse context, restoring the old one after.
    fn with_context<T>(&mut self, context: ParseContext, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = std::mem::replace(&mut self.context, context);
        let result = f(self);
        self.context = saved;
        result
    }

    /// Span from `start` through the most recently consumed token.
    #[inline]
    fn span_from(&self, start: Span) -> Span {
        start.merge(self.cursor.previous_span())
    }
}

/// Parse tokens into a program.
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> ParseOutput {
    Parser::new(tokens, interner).parse_program()
}

/// Parse one interactive input.
pub fn parse_interactive(tokens: &TokenList, interner: &StringInterner) -> InteractiveOutput {
    Parser::new(tokens, interner).parse_interactive()
}

#[cfg(test)]
mod tests;
