use super::*;
use lox_ir::TokenKind;
use pretty_assertions::assert_eq;

fn token(interner: &StringInterner, text: &str, line: u32) -> Token {
    Token::new(
        TokenKind::Identifier,
        interner.intern(text),
        None,
        line,
        Span::new(4, 4 + u32::try_from(text.len()).unwrap_or(0)),
    )
}

#[test]
fn test_messages() {
    let interner = StringInterner::new();
    let name = token(&interner, "count", 3);
    assert_eq!(
        undefined_variable(&name, &interner).message,
        "Undefined variable 'count'."
    );
    assert_eq!(
        unassigned_variable(&name, &interner).message,
        "Unassigned variable 'count'."
    );
    assert_eq!(
        undefined_property(&name, &interner).message,
        "Undefined property 'count'."
    );
    assert_eq!(
        arity_mismatch(2, 1, &name).message,
        "Expected 2 arguments but got 1."
    );
}

#[test]
fn test_location_comes_from_token() {
    let interner = StringInterner::new();
    let name = token(&interner, "x", 7);
    let error = not_callable(&name);
    assert_eq!(error.line, 7);
    assert_eq!(error.span, name.span);
    assert_eq!(
        error.to_string(),
        "Can only call functions and classes.\n[line 7]"
    );
}

#[test]
fn test_codes() {
    assert_eq!(EvalErrorKind::OperandNotNumber.code(), ErrorCode::E6003);
    assert_eq!(EvalErrorKind::InvalidAddOperands.code(), ErrorCode::E6003);
    assert_eq!(EvalErrorKind::FieldOnNonInstance.code(), ErrorCode::E6007);
    assert_eq!(EvalErrorKind::StackOverflow { depth: 1 }.code(), ErrorCode::E6009);
}

#[test]
fn test_to_diagnostic() {
    let error = stack_overflow(64, Span::new(0, 1), 1);
    let diag = error.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E6009);
    assert_eq!(diag.message, "Stack overflow.");
    assert_eq!(diag.primary_span(), Some(Span::new(0, 1)));
    assert_eq!(diag.notes, vec!["the call depth limit is 64".to_string()]);
}
