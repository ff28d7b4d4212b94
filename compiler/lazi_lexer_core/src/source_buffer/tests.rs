use super::*;
use pretty_assertions::assert_eq;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
    assert_eq!(buf.interior_nul(), None);
    // Sentinel present at index 0
    assert_eq!(buf.buf.as_bytes()[0], 0);
}

#[test]
fn ascii_source() {
    let buf = SourceBuffer::new("4*(3+1)");
    assert_eq!(buf.len(), 7);
    assert!(!buf.is_empty());
    assert_eq!(buf.as_bytes(), b"4*(3+1)");
    assert_eq!(buf.source(), "4*(3+1)");
    // Sentinel after source bytes
    assert_eq!(buf.buf.as_bytes()[7], 0);
}

// === Cache-Line Alignment ===

#[test]
fn buffer_aligned_to_cache_line() {
    for len in [0, 1, 10, 63, 64, 65, 127, 128, 1000] {
        let source: String = "x".repeat(len);
        let buf = SourceBuffer::new(&source);
        assert_eq!(
            buf.buf.len() % CACHE_LINE,
            0,
            "buffer length {} is not cache-line aligned for source length {}",
            buf.buf.len(),
            len
        );
        assert!(buf.buf.len() > len);
    }
}

#[test]
fn sentinel_and_padding_are_zero() {
    let buf = SourceBuffer::new("abc");
    for &b in &buf.buf.as_bytes()[3..] {
        assert_eq!(b, 0, "non-zero byte in sentinel/padding region");
    }
}

// === Interior NUL ===

#[test]
fn detects_first_interior_nul() {
    let buf = SourceBuffer::new("1+\02\03");
    assert_eq!(buf.interior_nul(), Some(2));
}

#[test]
fn no_interior_nul_in_plain_source() {
    assert_eq!(SourceBuffer::new("XYZ+(XYZ)").interior_nul(), None);
}

#[test]
fn source_and_cursor_share_one_allocation() {
    let buf = SourceBuffer::new("é+1");
    assert_eq!(buf.len(), 4);
    assert_eq!(buf.source(), "é+1");
    assert_eq!(buf.source().as_ptr(), buf.buf.as_ptr());
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), 0xC3);
}
