//! Lox IR - shared front-end data structures
//!
//! This crate contains the types every stage of the interpreter agrees on:
//! - Spans for source locations
//! - Names for interned identifiers and string contents
//! - Tokens and `TokenList` for lexer output
//! - AST nodes (`Expr`, `Stmt`, function and class declarations)
//! - `AstPrinter` for prefix-notation dumps
//!
//! Identifiers and string literals are interned once by the lexer; later
//! stages compare `Name`s instead of strings.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod interner;
mod name;
mod span;
mod token;

pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use span::Span;
pub use token::{Literal, Token, TokenKind, TokenList};
