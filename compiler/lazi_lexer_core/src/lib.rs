//! Low-level input layer for the lazi lexer.
//!
//! [`SourceBuffer`] owns an immutable, NUL-terminated copy of the source text;
//! [`Cursor`] walks it one byte at a time. The NUL sentinel means scanning
//! loops terminate without bounds checks of their own: every character class
//! the lexer tests for rejects `0x00`.

mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;
