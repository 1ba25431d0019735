use super::*;

#[test]
fn test_merge_covers_both() {
    assert_eq!(Span::new(10, 20).merge(Span::new(15, 30)), Span::new(10, 30));
    assert_eq!(Span::new(15, 30).merge(Span::new(2, 4)), Span::new(2, 30));
}

#[test]
fn test_point_is_empty() {
    assert!(Span::point(7).is_empty());
    assert!(Span::DUMMY.is_empty());
    assert!(!Span::new(3, 4).is_empty());
}

#[test]
fn test_range_conversions() {
    assert_eq!(Span::new(10, 20).to_range(), 10..20);
    assert_eq!(Span::try_from_range(3..9), Some(Span::new(3, 9)));
    let too_big = (u32::MAX as usize) + 1;
    assert_eq!(Span::try_from_range(0..too_big), None);
}

#[test]
fn test_debug_is_range_like() {
    assert_eq!(format!("{:?}", Span::new(6, 7)), "6..7");
}
