use super::*;

#[test]
fn test_function_resets_loop() {
    let ctx = ParseContext::NONE.with(ParseContext::IN_LOOP).enter_function();
    assert!(!ctx.in_loop());
    assert!(ctx.in_function());
}

#[test]
fn test_nested_class_drops_superclass() {
    let outer = ParseContext::NONE.enter_class(true);
    assert!(outer.in_subclass());
    let inner = outer.enter_function().enter_class(false);
    assert!(inner.in_class());
    assert!(!inner.in_subclass());
}

#[test]
fn test_default_is_top_level() {
    let ctx = ParseContext::default();
    assert_eq!(ctx, ParseContext::NONE);
    assert!(!ctx.in_class() && !ctx.in_function() && !ctx.in_loop());
}
