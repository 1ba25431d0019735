#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use lox_diagnostic::emitter::ColorMode;
use lox_eval::{buffer_handler, DEFAULT_MAX_DEPTH};
use pretty_assertions::assert_eq;

fn session_with_depth(max_depth: usize) -> (Session<Vec<u8>>, SharedPrintHandler) {
    let output = buffer_handler();
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    (Session::new(emitter, output.clone(), max_depth), output)
}

fn session() -> (Session<Vec<u8>>, SharedPrintHandler) {
    session_with_depth(DEFAULT_MAX_DEPTH)
}

fn diagnostics(session: Session<Vec<u8>>) -> String {
    String::from_utf8(session.into_emitter().into_inner()).unwrap()
}

#[test]
fn runs_script() {
    let (mut session, output) = session();
    let outcome = session.run_source("var a = 1;\nprint a + 2;", Some("add.lox"));
    assert_eq!(outcome, Outcome::Ok);
    assert_eq!(output.get_output(), "3\n");
    assert_eq!(diagnostics(session), "");
}

#[test]
fn syntax_errors_are_all_reported_and_nothing_runs() {
    let (mut session, output) = session();
    let outcome = session.run_source("print 1;\nprint ;\nvar = 3;", Some("bad.lox"));
    assert_eq!(outcome, Outcome::SyntaxError);
    assert_eq!(output.get_output(), "");

    let rendered = diagnostics(session);
    assert!(rendered.contains("error[E1002]: Expecting expression."));
    assert!(rendered.contains("error[E1001]: Expecting variable name."));
    assert!(rendered.contains(" --> bad.lox:2:7"));
    assert!(rendered.contains("error: aborting due to 2 previous errors"));
}

#[test]
fn lex_and_parse_errors_are_reported_together() {
    let (mut session, _) = session();
    let outcome = session.run_source("var a = @;", None);
    assert_eq!(outcome, Outcome::SyntaxError);

    let rendered = diagnostics(session);
    let unexpected = rendered.find("error[E0001]: Unexpected character.").unwrap();
    let expression = rendered.find("error[E1002]").unwrap();
    assert!(unexpected < expression);
}

#[test]
fn runtime_error_renders_snippet() {
    let (mut session, output) = session();
    let outcome = session.run_source("print 1;\nprint missing;", Some("test.lox"));
    assert_eq!(outcome, Outcome::RuntimeError);
    assert_eq!(output.get_output(), "1\n");
    assert_eq!(
        diagnostics(session),
        "error[E6001]: Undefined variable 'missing'.\n \
         --> test.lox:2:7\n  \
         |\n\
         2 | print missing;\n  \
         |       ^^^^^^^ not found in this scope\n\n"
    );
}

#[test]
fn stack_overflow_is_a_runtime_error() {
    let (mut session, _) = session_with_depth(50);
    let outcome = session.run_source("fun f() { f(); }\nf();", None);
    assert_eq!(outcome, Outcome::RuntimeError);
    let rendered = diagnostics(session);
    assert!(rendered.contains("Stack overflow."));
    assert!(rendered.contains("the call depth limit is 50"));
}

#[test]
fn repl_prints_bare_expressions() {
    let (mut session, output) = session();
    assert_eq!(session.run_line("var greeting = \"hi\";"), Outcome::Ok);
    assert_eq!(session.run_line("greeting + \" there\""), Outcome::Ok);
    assert_eq!(session.run_line("1 + 2"), Outcome::Ok);
    assert_eq!(session.run_line("print 4;"), Outcome::Ok);
    assert_eq!(output.get_output(), "hi there\n3\n4\n");
}

#[test]
fn repl_keeps_bindings_after_errors() {
    let (mut session, output) = session();
    assert_eq!(session.run_line("var a = 1;"), Outcome::Ok);
    assert_eq!(session.run_line("print nope;"), Outcome::RuntimeError);
    assert_eq!(session.run_line("print ;"), Outcome::SyntaxError);
    assert_eq!(session.run_line("fun f() { return a * 10; }"), Outcome::Ok);
    assert_eq!(session.run_line("f()"), Outcome::Ok);
    assert_eq!(output.get_output(), "10\n");
    assert_eq!(session.interpreter().call_depth(), 0);
}

#[test]
fn repl_runtime_error_in_expression() {
    let (mut session, output) = session();
    assert_eq!(session.run_line("-\"text\""), Outcome::RuntimeError);
    assert_eq!(output.get_output(), "");
    assert!(diagnostics(session).contains("Operand must be a number."));
}

#[test]
fn repl_does_not_summarize() {
    let (mut session, _) = session();
    assert_eq!(session.run_line("1 +"), Outcome::SyntaxError);
    assert!(!diagnostics(session).contains("aborting"));
}

#[test]
fn token_listing() {
    let (mut session, _) = session();
    let listing = session.tokens("var x = 1.5;\n\"hi\"", None).unwrap();
    assert_eq!(
        listing.lines().collect::<Vec<_>>(),
        vec![
            "   1 Var          var",
            "   1 Identifier   x",
            "   1 Equal        =",
            "   1 Number       1.5 = 1.5",
            "   1 Semicolon    ;",
            "   2 String       \"hi\" = \"hi\"",
            "   2 Eof",
        ]
    );
}

#[test]
fn token_listing_reports_lex_errors() {
    let (mut session, _) = session();
    assert_eq!(
        session.tokens("\"open", Some("s.lox")),
        Err(Outcome::SyntaxError)
    );
    assert!(diagnostics(session).contains("error[E0002]: Unterminated string."));
}

#[test]
fn syntax_tree_dump() {
    let (mut session, output) = session();
    let tree = session.syntax_tree("print 1 + 2 * 3;", None).unwrap();
    assert_eq!(tree, "(print (+ 1 (* 2 3)))");
    assert_eq!(output.get_output(), "");
    assert_eq!(session.syntax_tree("print", None), Err(Outcome::SyntaxError));
}

#[test]
fn exit_codes() {
    assert_eq!(Outcome::Ok.exit_code(), 0);
    assert_eq!(Outcome::SyntaxError.exit_code(), 65);
    assert_eq!(Outcome::RuntimeError.exit_code(), 70);
}
