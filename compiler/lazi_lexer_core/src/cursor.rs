//! Byte cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte and never moves
//! backwards. End of input is the first `0x00` byte, whether that is the
//! sentinel after the source or a NUL inside it.

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
///
/// # Invariant
///
/// `buf[source.len()] == 0x00`, guaranteed by
/// [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// The same source as text, for slicing.
    source: &'a str,
    /// Current read position (byte index into `buf`).
    pos: u32,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub(crate) fn new(buf: &'a [u8], source: &'a str) -> Self {
        debug_assert!(
            source.len() < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source.len()] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            source,
            pos: 0,
        }
    }

    /// Returns the byte at the current position (`0x00` at end of input).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Advance the cursor by one byte.
    ///
    /// Must not be called at end of input.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(!self.is_eof(), "advanced past end of input");
        self.pos += 1;
    }

    /// Returns `true` if the cursor sits on a NUL byte.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, so the sentinel stops the loop. This
    /// holds for all the ASCII classification predicates.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Extract source text from `start` to `end`.
    ///
    /// # Contract
    ///
    /// `start..end` must lie on character boundaries. Spans the scanner
    /// produces for integer and name tokens are pure ASCII and always do.
    fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.source[start as usize..end as usize]
    }

    /// Extract source text from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }
}

#[cfg(test)]
mod tests;
