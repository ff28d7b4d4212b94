use super::*;

#[test]
fn test_span_basics() {
    let span = Span::new(3, 8);
    assert_eq!((span.start, span.end), (3, 8));
    assert!(!span.is_empty());
}

#[test]
fn test_point_span_is_empty() {
    let span = Span::point(4);
    assert!(span.is_empty());
    assert_eq!(span.start, 4);
}

#[test]
fn test_span_debug_format() {
    assert_eq!(format!("{:?}", Span::new(1, 5)), "1..5");
    assert_eq!(Span::new(0, 2).to_string(), "0..2");
}
