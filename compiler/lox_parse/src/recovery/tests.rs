use super::*;
use lox_ir::StringInterner;

fn sync_from(source: &str, skip: usize) -> (usize, TokenKind) {
    let interner = StringInterner::new();
    let tokens = lox_lexer::lex(source, &interner).tokens;
    let mut cursor = Cursor::new(&tokens, &interner);
    for _ in 0..skip {
        cursor.advance();
    }
    let skipped = synchronize(&mut cursor, STMT_START);
    (skipped, cursor.current_kind())
}

#[test]
fn test_token_set_membership() {
    assert!(STMT_START.contains(TokenKind::Return));
    assert!(!STMT_START.contains(TokenKind::Identifier));
    assert!(NON_EXPR_STMT_START.contains(TokenKind::LeftBrace));
    assert!(NON_EXPR_STMT_START.contains(TokenKind::Var));
    assert!(!NON_EXPR_STMT_START.contains(TokenKind::Fun));
    assert!(STMT_START.union(NON_EXPR_STMT_START).contains(TokenKind::Fun));
    assert!(TokenSet::new().is_empty());
}

#[test]
fn test_stops_after_semicolon() {
    // error at `+`; skip `+ ;` and land on `x`
    assert_eq!(sync_from("a = + ; x = 1;", 2), (2, TokenKind::Identifier));
}

#[test]
fn test_stops_before_statement_keyword() {
    assert_eq!(sync_from("1 2 3 print 4;", 0), (3, TokenKind::Print));
}

#[test]
fn test_always_skips_offending_token() {
    // already sitting on a statement keyword: it is still consumed
    assert_eq!(sync_from("var var x;", 0), (1, TokenKind::Var));
}

#[test]
fn test_runs_to_eof() {
    assert_eq!(sync_from("1 2 3", 0), (3, TokenKind::Eof));
}
