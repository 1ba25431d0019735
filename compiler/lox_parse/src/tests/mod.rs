//! Parser tests.
//!
//! - `parser`: precedence, associativity, statements and desugaring
//! - `errors`: recovery, error batching and static checks
//! - `interactive`: expression-versus-program detection

mod parser;

use crate::{parse, ParseOutput};
use lox_ir::ast::AstPrinter;
use lox_ir::StringInterner;

fn parse_source(source: &str, interner: &StringInterner) -> ParseOutput {
    let lexed = lox_lexer::lex(source, interner);
    assert!(!lexed.has_errors(), "lex errors: {:?}", lexed.errors);
    parse(&lexed.tokens, interner)
}

/// Parse and render a program that must be free of errors.
fn print_program(source: &str) -> String {
    let interner = StringInterner::new();
    let output = parse_source(source, &interner);
    assert!(
        !output.has_errors(),
        "unexpected errors: {:?}",
        output
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
    );
    AstPrinter::new(&interner).print_program(&output.statements)
}

/// Rendered error messages, in report order.
fn error_messages(source: &str) -> Vec<String> {
    let interner = StringInterner::new();
    parse_source(source, &interner)
        .errors
        .iter()
        .map(ToString::to_string)
        .collect()
}
