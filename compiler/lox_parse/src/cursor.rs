//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.

use crate::recovery::TokenSet;
use crate::ParseError;
use lox_diagnostic::ErrorCode;
use lox_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use tracing::trace;

/// Cursor for navigating tokens.
///
/// Invariant: `pos` is always a valid index, and since the list ends in
/// `Eof` the cursor never walks past it.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Current position, used for snapshots.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Roll back to a position previously returned by [`position`](Self::position).
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(pos < self.tokens.len(), "cursor position {pos} out of bounds");
        self.pos = pos;
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// The most recently consumed token, or the current one at the start.
    #[inline]
    pub fn previous(&self) -> &Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.previous().span
        } else {
            Span::DUMMY
        }
    }

    /// Kind of the token after the current one (`Eof` at the end).
    #[inline]
    pub fn peek_next_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn check_set(&self, set: TokenSet) -> bool {
        set.contains(self.current_kind())
    }

    /// Consume the current token and return it. Stays put on `Eof`.
    pub fn advance(&mut self) -> Token {
        let token = *self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        trace!(kind = ?token.kind, line = token.line, "advance");
        token
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the current token if its kind is in `set`.
    pub fn eat_set(&mut self, set: TokenSet) -> Option<Token> {
        if self.check_set(set) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume a token of the given kind or fail with `message`.
    pub fn expect(&mut self, kind: TokenKind, message: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.make_expect_error(kind, message))
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_error(&self, kind: TokenKind, message: &str) -> ParseError {
        ParseError::at_token(ErrorCode::E1001, message, self.current(), self.interner)
            .with_context(format!("expected `{}`", kind.display_name()))
    }

    /// Build an error located at the current token.
    #[cold]
    pub fn error_here(&self, code: ErrorCode, message: impl Into<String>) -> ParseError {
        ParseError::at_token(code, message, self.current(), self.interner)
    }
}
