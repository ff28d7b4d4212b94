use super::*;
use pretty_assertions::assert_eq;

// === TokenTag codes ===

#[test]
fn byte_tags_use_byte_value() {
    assert_eq!(TokenTag::Byte(b'+').code(), 43);
    assert_eq!(TokenTag::EOF.code(), 0);
}

#[test]
fn reserved_codes_sit_above_byte_range() {
    assert_eq!(TokenTag::Int.code(), 256);
    assert_eq!(TokenTag::Name.code(), 257);
    assert_ne!(TokenTag::Int, TokenTag::Byte(128));
}

// === Display names ===

#[test]
fn display_names() {
    assert_eq!(TokenTag::Int.display_name(), "integer");
    assert_eq!(TokenTag::Name.display_name(), "name");
    assert_eq!(TokenTag::Byte(b')').display_name(), "')'");
    assert_eq!(TokenTag::Byte(b' ').display_name(), "' '");
    assert_eq!(TokenTag::EOF.display_name(), "<ASCII 0>");
    assert_eq!(TokenTag::Byte(b'\n').display_name(), "<ASCII 10>");
    assert_eq!(TokenTag::Byte(0x7F).display_name(), "<ASCII 127>");
    assert_eq!(TokenTag::Byte(0xC3).display_name(), "<ASCII 195>");
}

#[test]
fn display_matches_display_name() {
    assert_eq!(TokenTag::Byte(b'*').to_string(), "'*'");
    assert_eq!(TokenTag::Int.to_string(), "integer");
}

// === Token payloads ===

#[test]
fn payload_accessors_follow_kind() {
    let int = Token::new(TokenKind::Int(42), Span::new(0, 2));
    assert_eq!(int.int_value(), Some(42));
    assert_eq!(int.name(), None);
    assert_eq!(int.tag(), TokenTag::Int);

    let name = Token::new(TokenKind::Name(Name::new(3)), Span::new(0, 3));
    assert_eq!(name.name(), Some(Name::new(3)));
    assert_eq!(name.int_value(), None);
    assert_eq!(name.tag(), TokenTag::Name);
}

#[test]
fn eof_token_is_zero_width() {
    let eof = Token::eof(7);
    assert!(eof.is_eof());
    assert!(eof.span.is_empty());
    assert_eq!(eof.span.start, 7);
    assert_eq!(eof.tag(), TokenTag::EOF);
}
