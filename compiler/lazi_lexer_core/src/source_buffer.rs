//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! allowing the scanner to detect end of input without explicit bounds
//! checking. The total buffer size is rounded up to the next 64-byte
//! boundary for cache-line alignment.
//!
//! # Interior NUL
//!
//! A NUL byte anywhere in the source ends the input, exactly as the sentinel
//! does. The position of the first interior NUL is recorded so the
//! integration layer can report that trailing text was ignored.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// NUL is valid UTF-8, so the whole padded buffer is held as one `String`
/// and the source text is its `[..len]` prefix.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: String,
    /// Length of the source content in bytes.
    len: u32,
    /// Byte offset of the first NUL inside the source content, if any.
    interior_nul: Option<u32>,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source code.
    ///
    /// # Panics
    ///
    /// Panics if the source is longer than `u32::MAX` bytes; spans are
    /// 32-bit offsets.
    pub fn new(source: &str) -> Self {
        let source_len = source.len();
        let Ok(len) = u32::try_from(source_len) else {
            panic!("source of {source_len} bytes exceeds u32::MAX");
        };

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = String::with_capacity(padded_len);
        buf.push_str(source);
        buf.extend(std::iter::repeat_n('\0', padded_len - source_len));

        let interior_nul =
            memchr::memchr(0, source.as_bytes()).and_then(|pos| u32::try_from(pos).ok());

        Self {
            buf,
            len,
            interior_nul,
        }
    }

    /// Returns the source text (without sentinel or padding).
    fn source(&self) -> &str {
        &self.buf[..self.len as usize]
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        self.source().as_bytes()
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self.buf.as_bytes(), self.source())
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Byte offset of the first NUL inside the source, if any.
    ///
    /// Scanning stops there; everything after it is never tokenized.
    pub fn interior_nul(&self) -> Option<u32> {
        self.interior_nul
    }
}

#[cfg(test)]
mod tests;
