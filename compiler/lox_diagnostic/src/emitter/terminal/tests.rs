#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::ErrorCode;
use lox_ir::Span;
use pretty_assertions::assert_eq;

fn render(emitter: TerminalEmitter<Vec<u8>>) -> String {
    String::from_utf8(emitter.into_inner()).unwrap()
}

fn expect_expression() -> Diagnostic {
    Diagnostic::error(ErrorCode::E1002)
        .with_message("Expecting expression.")
        .with_label(Span::new(6, 7), "expected expression")
}

#[test]
fn test_snippet_with_path() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source("print ;", Some("script.lox".to_string()));
    emitter.emit(&expect_expression());
    assert_eq!(
        render(emitter),
        "error[E1002]: Expecting expression.\n \
         --> script.lox:1:7\n  \
         |\n\
         1 | print ;\n  \
         |       ^ expected expression\n\n"
    );
}

#[test]
fn test_underline_covers_span_on_later_line() {
    let source = "var a = 1;\nprint a + nope;";
    let diag = Diagnostic::error(ErrorCode::E6001)
        .with_message("Undefined variable 'nope'.")
        .with_label(Span::new(21, 25), "");
    let mut emitter =
        TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false).with_source(source, None);
    emitter.emit(&diag);
    let out = render(emitter);
    assert!(out.contains(" --> 2:11\n"), "{out}");
    assert!(out.contains("2 | print a + nope;\n"), "{out}");
    assert!(out.contains("  |           ^^^^\n"), "{out}");
}

#[test]
fn test_without_source_falls_back_to_line() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit(&expect_expression().at_line(4));
    let out = render(emitter);
    assert!(out.contains("  --> line 4: expected expression\n"), "{out}");
}

#[test]
fn test_without_source_or_line_shows_span() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit(&expect_expression());
    let out = render(emitter);
    assert!(out.contains("  --> 6..7: expected expression"), "{out}");
}

#[test]
fn test_secondary_labels_use_dashes() {
    let source = "class A < A {}";
    let diag = Diagnostic::error(ErrorCode::E1009)
        .with_message("A class can't inherit from itself.")
        .with_label(Span::new(10, 11), "superclass")
        .with_label(Span::new(6, 7), "class");
    let mut emitter =
        TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false).with_source(source, None);
    emitter.emit(&diag);
    let out = render(emitter);
    assert_eq!(out.matches("-->").count(), 1, "{out}");
    assert!(out.contains("  |           ^ superclass\n"), "{out}");
    assert!(out.contains("  |       - class\n"), "{out}");
}

#[test]
fn test_notes_and_help() {
    let diag = Diagnostic::error(ErrorCode::E6005)
        .with_message("Expected 2 arguments but got 1.")
        .with_note("`add` takes 2 parameters")
        .with_suggestion("pass another argument");
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit(&diag);
    let out = render(emitter);
    assert!(out.contains("  = note: `add` takes 2 parameters\n"));
    assert!(out.contains("  = help: pass another argument\n"));
}

#[test]
fn test_colors_emit_escape_codes() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
    emitter.emit(&expect_expression());
    let out = render(emitter);
    assert!(out.contains("\x1b[1;31merror\x1b[0m"));
}

#[test]
fn test_emit_summary() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_summary(2);
    emitter.emit_summary(1);
    emitter.emit_summary(0);
    assert_eq!(
        render(emitter),
        "error: aborting due to 2 previous errors\n\
         error: aborting due to previous error\n"
    );
}

#[test]
fn test_color_mode() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
    assert_eq!("never".parse::<ColorMode>(), Ok(ColorMode::Never));
    assert!("rainbow".parse::<ColorMode>().is_err());
}
