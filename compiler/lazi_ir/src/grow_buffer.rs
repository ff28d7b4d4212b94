//! Amortized-growth contiguous buffer.
//!
//! `GrowBuffer<T>` stores its elements in a `Vec<T>` but owns the growth
//! policy: when a push would exceed capacity, capacity becomes
//! `max(2 * capacity + 1, required_len)`. Every other structure in the
//! pipeline (interner table, token lists) keeps its storage here.
//!
//! # Memory Contract
//!
//! Growth is all-or-nothing. If the allocator cannot satisfy a reallocation,
//! the process aborts through [`std::alloc::handle_alloc_error`]; there is no
//! recoverable path and callers must not expect one. The old storage is only
//! released once the new allocation has succeeded, so existing elements keep
//! their values and order across growth.

use std::alloc::{handle_alloc_error, Layout};
use std::fmt;
use std::ops::Deref;

/// Owned, resizable, contiguous sequence with a fixed doubling growth rule.
///
/// Elements `[0, len)` are always valid and contiguous. Capacity never
/// shrinks except through [`release`](Self::release).
pub struct GrowBuffer<T> {
    items: Vec<T>,
    /// Logical capacity under the growth rule. The backing `Vec` holds at
    /// least this many slots.
    cap: usize,
}

/// Capacity after growing a buffer of capacity `cap` to hold `required` items.
#[inline]
fn grown_capacity(cap: usize, required: usize) -> usize {
    cap.saturating_mul(2).saturating_add(1).max(required)
}

impl<T> GrowBuffer<T> {
    /// Create an unallocated buffer (length and capacity 0).
    pub const fn new() -> Self {
        GrowBuffer {
            items: Vec::new(),
            cap: 0,
        }
    }

    /// Number of elements pushed so far. 0 for an unallocated buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no elements have been pushed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current capacity. 0 for an unallocated buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Append `item`, growing the backing storage if needed. Amortized O(1).
    pub fn push(&mut self, item: T) {
        self.reserve_for(1);
        self.items.push(item);
    }

    /// Release the backing storage.
    ///
    /// Afterwards the buffer is unallocated: `len() == capacity() == 0`.
    pub fn release(&mut self) {
        self.items = Vec::new();
        self.cap = 0;
    }

    /// Ensure room for `additional` more elements under the growth rule.
    fn reserve_for(&mut self, additional: usize) {
        let Some(required) = self.items.len().checked_add(additional) else {
            panic!("GrowBuffer length overflow");
        };
        if required <= self.cap {
            return;
        }

        let new_cap = grown_capacity(self.cap, required);
        if self
            .items
            .try_reserve_exact(new_cap - self.items.len())
            .is_err()
        {
            match Layout::array::<T>(new_cap) {
                Ok(layout) => handle_alloc_error(layout),
                Err(_) => panic!("GrowBuffer capacity overflow: {new_cap} elements"),
            }
        }
        self.cap = new_cap;
    }
}

impl<T> Default for GrowBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for GrowBuffer<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone> Clone for GrowBuffer<T> {
    fn clone(&self) -> Self {
        let mut copy = GrowBuffer::new();
        copy.reserve_for(self.cap);
        copy.items.extend_from_slice(&self.items);
        copy
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for GrowBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for GrowBuffer<T> {}

impl<T> Extend<T> for GrowBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for GrowBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buf = GrowBuffer::new();
        buf.extend(iter);
        buf
    }
}

impl<T> IntoIterator for GrowBuffer<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a GrowBuffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests;
