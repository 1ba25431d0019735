//! Lexer error types.

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::Span;

/// A lexer error. Scanning continues past it, so one pass can report
/// several.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    /// 1-based line of the error start.
    pub line: u32,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A character that cannot start any token.
    UnexpectedChar(char),
    /// Missing closing `"`.
    UnterminatedString,
    /// The interner has no room for another distinct name.
    TooManyNames,
}

impl LexError {
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnexpectedChar(_) => ErrorCode::E0001,
            LexErrorKind::UnterminatedString => ErrorCode::E0002,
            LexErrorKind::TooManyNames => ErrorCode::E0003,
        }
    }

    pub fn message(&self) -> &'static str {
        match self.kind {
            LexErrorKind::UnexpectedChar(_) => "Unexpected character.",
            LexErrorKind::UnterminatedString => "Unterminated string.",
            LexErrorKind::TooManyNames => "Too many distinct names.",
        }
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.message())
            .at_line(self.line);
        match self.kind {
            LexErrorKind::UnexpectedChar(c) => {
                diag.with_label(self.span, format!("{c:?} is not valid here"))
            }
            LexErrorKind::UnterminatedString => diag
                .with_label(Span::point(self.span.start), "string starts here")
                .with_suggestion("add a closing `\"`"),
            LexErrorKind::TooManyNames => diag
                .with_label(self.span, "no room to intern this")
                .with_suggestion("restart the session to clear the name table"),
        }
    }
}

impl std::fmt::Display for LexError {
    /// `[line N] Error: message`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message())
    }
}

impl std::error::Error for LexError {}
