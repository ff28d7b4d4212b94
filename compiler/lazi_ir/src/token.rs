//! Token types for lexer output.
//!
//! A token's *kind* is an integer: either a raw
//! byte (punctuation, or `0` for end of input) or one of the reserved kinds
//! `INT` and `NAME`. Here the integer survives as [`TokenTag`], used for
//! matching and diagnostics, while the payload lives in the [`TokenKind`]
//! sum type so only the meaningful variant can ever be read.

use std::borrow::Cow;
use std::fmt;

use crate::{Name, Span};

/// Payload-free token kind.
///
/// This is what the parser matches against and what diagnostics print.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenTag {
    /// Integer literal.
    Int,
    /// Identifier.
    Name,
    /// Any other single byte. `Byte(0)` is end of input.
    Byte(u8),
}

impl TokenTag {
    /// End-of-input sentinel (the NUL byte).
    pub const EOF: TokenTag = TokenTag::Byte(0);

    /// Integer code of [`TokenTag::Int`].
    ///
    /// Reserved kinds sit above the byte range so no input byte collides
    /// with them.
    pub const INT_CODE: u32 = 256;

    /// Integer code of [`TokenTag::Name`].
    pub const NAME_CODE: u32 = 257;

    /// The integer token kind: the byte value for single-byte tokens,
    /// [`INT_CODE`](Self::INT_CODE) or [`NAME_CODE`](Self::NAME_CODE) otherwise.
    #[inline]
    pub const fn code(self) -> u32 {
        match self {
            TokenTag::Int => Self::INT_CODE,
            TokenTag::Name => Self::NAME_CODE,
            TokenTag::Byte(b) => b as u32,
        }
    }

    /// Human-readable name used in error messages.
    ///
    /// `integer`, `name`, a quoted character for printable ASCII, and
    /// `<ASCII N>` for every other byte.
    pub fn display_name(self) -> Cow<'static, str> {
        match self {
            TokenTag::Int => Cow::Borrowed("integer"),
            TokenTag::Name => Cow::Borrowed("name"),
            TokenTag::Byte(b) if b == b' ' || b.is_ascii_graphic() => {
                Cow::Owned(format!("'{}'", char::from(b)))
            }
            TokenTag::Byte(b) => Cow::Owned(format!("<ASCII {b}>")),
        }
    }
}

impl fmt::Display for TokenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// Token kind with its payload.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Integer literal: `12345`.
    Int(u64),
    /// Identifier, interned: `XYZ`.
    Name(Name),
    /// Any other single byte. `Byte(0)` is end of input.
    Byte(u8),
}

impl TokenKind {
    /// End-of-input kind.
    pub const EOF: TokenKind = TokenKind::Byte(0);

    /// Strip the payload.
    #[inline]
    pub const fn tag(self) -> TokenTag {
        match self {
            TokenKind::Int(_) => TokenTag::Int,
            TokenKind::Name(_) => TokenTag::Name,
            TokenKind::Byte(b) => TokenTag::Byte(b),
        }
    }

    /// Returns `true` for the end-of-input sentinel.
    #[inline]
    pub const fn is_eof(self) -> bool {
        matches!(self, TokenKind::Byte(0))
    }
}

/// One lexical unit: kind, payload and source range.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Create a new token.
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// End-of-input token at byte offset `pos`.
    #[inline]
    pub const fn eof(pos: u32) -> Self {
        Token {
            kind: TokenKind::EOF,
            span: Span::point(pos),
        }
    }

    #[inline]
    pub const fn tag(&self) -> TokenTag {
        self.kind.tag()
    }

    #[inline]
    pub const fn is_eof(&self) -> bool {
        self.kind.is_eof()
    }

    /// Integer payload, if this is an integer literal.
    #[inline]
    pub const fn int_value(&self) -> Option<u64> {
        match self.kind {
            TokenKind::Int(value) => Some(value),
            _ => None,
        }
    }

    /// Interned name, if this is an identifier.
    #[inline]
    pub const fn name(&self) -> Option<Name> {
        match self.kind {
            TokenKind::Name(name) => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
