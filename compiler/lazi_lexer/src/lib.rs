//! Lexer for lazi.
//!
//! Turns a [`SourceBuffer`] into [`Token`]s one at a time. Identifiers are
//! interned through a caller-supplied [`StringInterner`], so the lexer itself
//! owns no heap state.
//!
//! Tokenization rules, in precedence order:
//! 1. a run of decimal digits is an `INT`
//! 2. a letter or `_` followed by letters, digits or `_` is a `NAME`
//! 3. any other byte is a single-byte token whose kind is that byte;
//!    the NUL byte is end of input
//!
//! There is no whitespace skipping and no comment syntax.

mod lexer;
mod token_dump;

pub use lexer::Lexer;
pub use token_dump::format_token;

use lazi_ir::{GrowBuffer, StringInterner, Token};
use lazi_lexer_core::SourceBuffer;

/// Lex `source` completely.
///
/// The returned list always ends with exactly one end-of-input token.
pub fn lex_all(source: &str, interner: &StringInterner) -> GrowBuffer<Token> {
    let buf = SourceBuffer::new(source);
    Lexer::new(&buf, interner).collect()
}
