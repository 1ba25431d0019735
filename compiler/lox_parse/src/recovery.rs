//! Error recovery for the parser.
//!
//! Token sets and synchronization for continuing after a syntax error, so
//! one pass reports every independent error instead of only the first.

use crate::cursor::Cursor;
use lox_ir::TokenKind;
use tracing::debug;

// TokenSet uses a u64 bitset, so all discriminant indices must be < 64.
const _: () = assert!(
    TokenKind::MAX_DISCRIMINANT < 64,
    "TokenSet uses u64 bitset; all discriminant indices must be < 64"
);

/// A set of token kinds with O(1) membership testing.
///
/// Each bit corresponds to a `TokenKind` discriminant index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind (builder form for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.discriminant_index()))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind.discriminant_index())) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Tokens that plausibly begin a new statement. Recovery stops in front
/// of them.
pub const STMT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Class)
    .with(TokenKind::Fun)
    .with(TokenKind::Var)
    .with(TokenKind::For)
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Print)
    .with(TokenKind::Return);

/// Statements that never start with an expression. The interactive
/// parser skips its expression attempt for these. `fun` is absent since
/// it may begin an anonymous function.
pub const NON_EXPR_STMT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Class)
    .with(TokenKind::Var)
    .with(TokenKind::For)
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Print)
    .with(TokenKind::Return)
    .with(TokenKind::Break)
    .with(TokenKind::LeftBrace);

pub const EQUALITY_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::BangEqual)
    .with(TokenKind::EqualEqual);

pub const COMPARISON_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Greater)
    .with(TokenKind::GreaterEqual)
    .with(TokenKind::Less)
    .with(TokenKind::LessEqual);

pub const TERM_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Minus)
    .with(TokenKind::Plus);

pub const FACTOR_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Slash)
    .with(TokenKind::Star);

pub const UNARY_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Bang)
    .with(TokenKind::Minus);

/// Discard tokens after a syntax error until a statement boundary.
///
/// The offending token is always skipped. Scanning then stops right after
/// a `;` or right before a token in `recovery`. Returns the number of
/// tokens skipped.
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet) -> usize {
    let start = cursor.position();
    cursor.advance();
    while !cursor.is_at_end() {
        if cursor.previous().kind == TokenKind::Semicolon || cursor.check_set(recovery) {
            break;
        }
        cursor.advance();
    }
    let skipped = cursor.position() - start;
    debug!(skipped, line = cursor.current().line, "synchronized after parse error");
    skipped
}

#[cfg(test)]
mod tests;
