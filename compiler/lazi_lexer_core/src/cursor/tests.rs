use crate::SourceBuffer;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn starts_at_zero() {
    let buf = SourceBuffer::new("12");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'1');
    assert!(!cursor.is_eof());
}

#[test]
fn empty_source_is_eof() {
    let buf = SourceBuffer::new("");
    let cursor = buf.cursor();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn advance_reaches_sentinel() {
    let buf = SourceBuffer::new("+-");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'-');
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn eat_while_stops_at_class_boundary() {
    let buf = SourceBuffer::new("12345+994");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_digit());
    assert_eq!(cursor.pos(), 5);
    assert_eq!(cursor.current(), b'+');
    assert_eq!(cursor.slice_from(0), "12345");
}

#[test]
fn eat_while_stops_at_sentinel() {
    let buf = SourceBuffer::new("abc_9");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
    assert!(cursor.is_eof());
    assert_eq!(cursor.slice(0, cursor.pos()), "abc_9");
}

#[test]
fn interior_nul_reads_as_eof() {
    let buf = SourceBuffer::new("7\08");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 1);
}

proptest! {
    #[test]
    fn eat_while_consumes_exact_digit_prefix(digits in "[0-9]{0,40}", rest in "[a-z+*()]{0,10}") {
        let source = format!("{digits}{rest}");
        let buf = SourceBuffer::new(&source);
        let mut cursor = buf.cursor();
        cursor.eat_while(|b| b.is_ascii_digit());
        prop_assert_eq!(cursor.pos() as usize, digits.len());
        prop_assert_eq!(cursor.slice_from(0), digits.as_str());
    }
}
