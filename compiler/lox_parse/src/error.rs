//! Parse errors.

use std::fmt;

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::{Span, StringInterner, Token, TokenKind};

/// Where a parse error points, for the classic one-line rendering.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorLocation {
    /// The error is at the end of input.
    End,
    /// The error is at a token with this lexeme.
    Lexeme(String),
}

/// A syntax error.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    /// 1-based line of the offending token.
    pub line: u32,
    pub location: ErrorLocation,
    /// Label text for the diagnostic, e.g. "expected `;`".
    pub context: Option<String>,
}

impl ParseError {
    /// Create an error pointing at `token`.
    #[cold]
    pub fn at_token(
        code: ErrorCode,
        message: impl Into<String>,
        token: &Token,
        interner: &StringInterner,
    ) -> Self {
        let location = if token.kind == TokenKind::Eof {
            ErrorLocation::End
        } else {
            ErrorLocation::Lexeme(token.text(interner).to_string())
        };
        ParseError {
            code,
            message: message.into(),
            span: token.span,
            line: token.line,
            location,
            context: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Convert to a full Diagnostic for rich error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match (&self.context, &self.location) {
            (Some(context), _) => context.clone(),
            (None, ErrorLocation::End) => "at end of input".to_string(),
            (None, ErrorLocation::Lexeme(_)) => self.code.description().to_string(),
        };
        Diagnostic::error(self.code)
            .with_message(&self.message)
            .at_line(self.line)
            .with_label(self.span, label)
    }
}

impl fmt::Display for ParseError {
    /// `[line N] Error at 'x': message` or `[line N] Error at end: message`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            ErrorLocation::End => write!(f, "[line {}] Error at end: {}", self.line, self.message),
            ErrorLocation::Lexeme(lexeme) => write!(
                f,
                "[line {}] Error at '{lexeme}': {}",
                self.line, self.message
            ),
        }
    }
}

impl std::error::Error for ParseError {}
