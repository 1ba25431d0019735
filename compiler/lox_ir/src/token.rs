//! Tokens produced by the lexer and consumed by the parser.

use std::fmt;
use std::ops::Index;

use crate::{Name, Span, StringInterner};

/// Token kinds.
///
/// Fieldless so that the discriminant doubles as a bit index for the
/// parser's `TokenSet`. Literal payloads travel on [`Token::literal`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    // Single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    And,
    Break,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenKind {
    /// Highest discriminant index; `TokenSet` relies on this fitting a `u64`.
    pub const MAX_DISCRIMINANT: u8 = TokenKind::Eof as u8;

    /// Discriminant index used for bitset membership.
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// Source text shared by every token of this kind. `None` for
    /// identifiers, literals and `Eof`, whose text varies.
    pub const fn fixed_lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::Identifier | TokenKind::String | TokenKind::Number | TokenKind::Eof => None,
            _ => Some(self.display_name()),
        }
    }

    /// Human-readable name for error messages.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Minus => "-",
            TokenKind::Plus => "+",
            TokenKind::Semicolon => ";",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Bang => "!",
            TokenKind::BangEqual => "!=",
            TokenKind::Equal => "=",
            TokenKind::EqualEqual => "==",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::And => "and",
            TokenKind::Break => "break",
            TokenKind::Class => "class",
            TokenKind::Else => "else",
            TokenKind::False => "false",
            TokenKind::Fun => "fun",
            TokenKind::For => "for",
            TokenKind::If => "if",
            TokenKind::Nil => "nil",
            TokenKind::Or => "or",
            TokenKind::Print => "print",
            TokenKind::Return => "return",
            TokenKind::Super => "super",
            TokenKind::This => "this",
            TokenKind::True => "true",
            TokenKind::Var => "var",
            TokenKind::While => "while",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Literal payload of a `Number` or `String` token.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Literal {
    Number(f64),
    /// String contents without the surrounding quotes.
    Str(Name),
}

/// A lexical token.
///
/// Immutable and `Copy`: the AST stores tokens by value wherever a node
/// needs a name or a location to report errors against.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    /// Interned source text of an identifier or literal. Keywords and
    /// punctuation carry a fixed name instead; see [`Token::text`].
    pub lexeme: Name,
    pub literal: Option<Literal>,
    /// 1-based source line.
    pub line: u32,
    pub span: Span,
}

impl Token {
    /// Create a new token.
    #[inline]
    pub const fn new(
        kind: TokenKind,
        lexeme: Name,
        literal: Option<Literal>,
        line: u32,
        span: Span,
    ) -> Self {
        Token {
            kind,
            lexeme,
            literal,
            line,
            span,
        }
    }

    /// The end-of-input marker.
    #[inline]
    pub const fn eof(line: u32, offset: u32) -> Self {
        Token::new(TokenKind::Eof, Name::EMPTY, None, line, Span::point(offset))
    }

    /// Source text of the token.
    pub fn text(&self, interner: &StringInterner) -> &'static str {
        match self.kind.fixed_lexeme() {
            Some(text) => text,
            None => interner.lookup(self.lexeme),
        }
    }
}

/// The token stream handed from lexer to parser.
///
/// Invariant: never empty, and the last token is always `Eof`.
#[derive(Clone, PartialEq, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Build a token list, appending an `Eof` token unless one is already last.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let (line, offset) = tokens
                .last()
                .map_or((1, 0), |last| (last.line, last.span.end));
            tokens.push(Token::eof(line, offset));
        }
        TokenList { tokens }
    }

    /// Number of tokens, including the trailing `Eof`.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false: the list holds at least the `Eof` token.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get a token by index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// The trailing `Eof` token.
    #[inline]
    pub fn eof(&self) -> &Token {
        &self.tokens[self.tokens.len() - 1]
    }

    /// Iterate over the tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Borrow as a slice.
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
