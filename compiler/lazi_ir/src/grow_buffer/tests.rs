use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// === Lifecycle ===

#[test]
fn new_buffer_is_unallocated() {
    let buf: GrowBuffer<i32> = GrowBuffer::new();
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.capacity(), 0);
    assert!(buf.is_empty());
}

#[test]
fn push_1024_then_release() {
    let mut buf = GrowBuffer::new();
    for i in 0..1024 {
        buf.push(i);
    }
    assert_eq!(buf.len(), 1024);
    for (i, &item) in buf.iter().enumerate() {
        assert_eq!(item, i);
    }

    buf.release();
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.capacity(), 0);
    assert!(buf.is_empty());
}

#[test]
fn release_then_reuse() {
    let mut buf = GrowBuffer::new();
    buf.push("a");
    buf.release();
    buf.push("b");
    assert_eq!(&buf[..], &["b"]);
    assert_eq!(buf.capacity(), 1);
}

// === Growth Rule ===

#[test]
fn capacity_follows_doubling_rule() {
    let mut buf = GrowBuffer::new();
    let mut seen = Vec::new();
    for i in 0..20u8 {
        buf.push(i);
        if seen.last() != Some(&buf.capacity()) {
            seen.push(buf.capacity());
        }
    }
    // 0 -> 1 -> 3 -> 7 -> 15 -> 31
    assert_eq!(seen, vec![1, 3, 7, 15, 31]);
}

#[test]
fn grown_capacity_honours_required_length() {
    assert_eq!(grown_capacity(0, 1), 1);
    assert_eq!(grown_capacity(3, 4), 7);
    assert_eq!(grown_capacity(1, 10), 10);
    assert_eq!(grown_capacity(usize::MAX, 1), usize::MAX);
}

#[test]
fn extend_grows_once_per_rule_step() {
    let mut buf: GrowBuffer<u32> = (0..5).collect();
    assert_eq!(buf.len(), 5);
    assert_eq!(buf.capacity(), 7);
    buf.extend(5..8);
    assert_eq!(buf.capacity(), 15);
    assert_eq!(&buf[..], &[0, 1, 2, 3, 4, 5, 6, 7]);
}

// === Trait Impls ===

#[test]
fn clone_preserves_contents_and_capacity() {
    let buf: GrowBuffer<String> = ["x", "y", "z"].iter().map(ToString::to_string).collect();
    let copy = buf.clone();
    assert_eq!(copy, buf);
    assert_eq!(copy.capacity(), buf.capacity());
}

#[test]
fn debug_renders_as_list() {
    let buf: GrowBuffer<i32> = vec![1, 2].into_iter().collect();
    assert_eq!(format!("{buf:?}"), "[1, 2]");
}

#[test]
fn zero_sized_elements() {
    let mut buf = GrowBuffer::new();
    for _ in 0..100 {
        buf.push(());
    }
    assert_eq!(buf.len(), 100);
    assert!(buf.capacity() >= 100);
}

proptest! {
    #[test]
    fn pushes_are_preserved_in_order(items in proptest::collection::vec(any::<i64>(), 0..512)) {
        let mut buf = GrowBuffer::new();
        for &item in &items {
            buf.push(item);
            prop_assert!(buf.len() <= buf.capacity());
        }
        prop_assert_eq!(buf.len(), items.len());
        prop_assert_eq!(&buf[..], items.as_slice());
    }
}
