//! Lexer for Lox using logos.
//!
//! Turns source text into a [`TokenList`]. Identifier, number and string
//! lexemes and string contents are interned; keywords and punctuation are
//! not, so a long REPL session only grows the interner with new names.
//! Every token records its byte span and the 1-based line it starts on.
//! Errors never stop the scan: the token list is always complete (and
//! `Eof`-terminated), with the problems reported alongside.

mod lex_error;
mod raw_token;

use logos::Logos;
use lox_diagnostic::span_utils::LineOffsetTable;
use lox_ir::{InternError, Literal, Name, Span, StringInterner, Token, TokenKind, TokenList};
use tracing::debug;

pub use lex_error::{LexError, LexErrorKind};
use raw_token::RawToken;

/// Result of lexing a source text.
#[derive(Clone, Debug, PartialEq)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex source code into a `TokenList`.
pub fn lex(source: &str, interner: &StringInterner) -> LexOutput {
    let lines = LineOffsetTable::build(source);
    let mut tokens = Vec::with_capacity(source.len() / 4);
    let mut errors = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        // Sources past 4 GiB lose span information.
        let span = Span::try_from_range(logos.span()).unwrap_or(Span::DUMMY);
        let slice = logos.slice();
        let line = lines.line_from_offset(span.start);

        match result {
            Ok(RawToken::UnterminatedString) => errors.push(LexError {
                kind: LexErrorKind::UnterminatedString,
                span,
                line,
            }),
            Ok(raw) => match make_token(raw, slice, interner, line, span) {
                Ok(token) => tokens.push(token),
                Err(InternError::Overflow { count }) => {
                    debug!(count, "interner full");
                    errors.push(LexError {
                        kind: LexErrorKind::TooManyNames,
                        span,
                        line,
                    });
                }
            },
            Err(()) => {
                let c = slice.chars().next().unwrap_or('\u{fffd}');
                errors.push(LexError {
                    kind: LexErrorKind::UnexpectedChar(c),
                    span,
                    line,
                });
            }
        }
    }

    let end = u32::try_from(source.len()).unwrap_or(u32::MAX);
    let end_line = lines.line_from_offset(end);
    tokens.push(Token::eof(end_line, end));

    debug!(
        tokens = tokens.len(),
        errors = errors.len(),
        "lexed source"
    );

    LexOutput {
        tokens: TokenList::new(tokens),
        errors,
    }
}

/// Build the token for one raw match. Only tokens without a fixed
/// spelling touch the interner.
fn make_token(
    raw: RawToken,
    slice: &str,
    interner: &StringInterner,
    line: u32,
    span: Span,
) -> Result<Token, InternError> {
    let (kind, literal) = convert_token(raw, slice, interner)?;
    let lexeme = match kind.fixed_lexeme() {
        Some(_) => Name::EMPTY,
        None => interner.try_intern(slice)?,
    };
    Ok(Token::new(kind, lexeme, literal, line, span))
}

/// Map a raw token to its kind and literal payload.
fn convert_token(
    raw: RawToken,
    slice: &str,
    interner: &StringInterner,
) -> Result<(TokenKind, Option<Literal>), InternError> {
    let kind = match raw {
        RawToken::Number(n) => return Ok((TokenKind::Number, Some(Literal::Number(n)))),
        RawToken::String => {
            let contents = slice
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .unwrap_or(slice);
            let name = interner.try_intern(contents)?;
            return Ok((TokenKind::String, Some(Literal::Str(name))));
        }
        RawToken::LeftParen => TokenKind::LeftParen,
        RawToken::RightParen => TokenKind::RightParen,
        RawToken::LeftBrace => TokenKind::LeftBrace,
        RawToken::RightBrace => TokenKind::RightBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Star => TokenKind::Star,
        RawToken::Bang => TokenKind::Bang,
        RawToken::BangEqual => TokenKind::BangEqual,
        RawToken::Equal => TokenKind::Equal,
        RawToken::EqualEqual => TokenKind::EqualEqual,
        RawToken::Greater => TokenKind::Greater,
        RawToken::GreaterEqual => TokenKind::GreaterEqual,
        RawToken::Less => TokenKind::Less,
        RawToken::LessEqual => TokenKind::LessEqual,
        RawToken::And => TokenKind::And,
        RawToken::Break => TokenKind::Break,
        RawToken::Class => TokenKind::Class,
        RawToken::Else => TokenKind::Else,
        RawToken::False => TokenKind::False,
        RawToken::Fun => TokenKind::Fun,
        RawToken::For => TokenKind::For,
        RawToken::If => TokenKind::If,
        RawToken::Nil => TokenKind::Nil,
        RawToken::Or => TokenKind::Or,
        RawToken::Print => TokenKind::Print,
        RawToken::Return => TokenKind::Return,
        RawToken::Super => TokenKind::Super,
        RawToken::This => TokenKind::This,
        RawToken::True => TokenKind::True,
        RawToken::Var => TokenKind::Var,
        RawToken::While => TokenKind::While,
        RawToken::Ident => TokenKind::Identifier,
        // Reported as an error by the caller and never converted.
        RawToken::UnterminatedString => TokenKind::String,
    };
    Ok((kind, None))
}
