//! Stateful lexer with one token of lookahead.

use lazi_ir::{Span, StringInterner, Token, TokenKind};
use lazi_lexer_core::{Cursor, SourceBuffer};
use tracing::{debug, trace};

#[inline]
fn is_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

#[inline]
fn is_name_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Lexer over an immutable source buffer.
///
/// Holds exactly one token of lookahead: [`peek`](Self::peek) shows it,
/// [`advance`](Self::advance) hands it out and scans the next one. The
/// sequence is forward-only and cannot be restarted.
///
/// Once the end-of-input token is current the lexer stays there: further
/// `advance` calls keep returning it without moving the cursor.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    interner: &'a StringInterner,
    current: Token,
    /// Set once the iterator has yielded the end-of-input token.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer and scan the first token.
    pub fn new(source: &'a SourceBuffer, interner: &'a StringInterner) -> Self {
        if let Some(pos) = source.interior_nul() {
            debug!(
                pos,
                ignored = source.len() - pos,
                "source contains NUL; input ends there"
            );
        }
        let mut cursor = source.cursor();
        let current = scan_token(&mut cursor, interner);
        Lexer {
            cursor,
            interner,
            current,
            finished: false,
        }
    }

    /// The current token, without consuming it.
    #[inline]
    pub fn peek(&self) -> &Token {
        &self.current
    }

    /// Consume the current token and scan the next one.
    ///
    /// Returns the consumed token. At end of input the end token is
    /// returned again and nothing moves.
    pub fn advance(&mut self) -> Token {
        let token = self.current;
        if !token.is_eof() {
            self.current = scan_token(&mut self.cursor, self.interner);
        }
        token
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token up to and including the end-of-input token.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.advance();
        self.finished = token.is_eof();
        Some(token)
    }
}

/// Scan one token starting at the cursor.
///
/// Leaves the cursor on the first unconsumed byte.
fn scan_token(cursor: &mut Cursor<'_>, interner: &StringInterner) -> Token {
    let start = cursor.pos();
    let first = cursor.current();

    let token = if first == 0 {
        Token::eof(start)
    } else {
        let kind = scan_kind(cursor, interner, first);
        Token::new(kind, Span::new(start, cursor.pos()))
    };
    trace!(
        kind = %token.tag(),
        code = token.tag().code(),
        span_start = token.span.start,
        span_end = token.span.end,
        "scanned token"
    );
    token
}

/// Scan the non-NUL token starting with `first`.
fn scan_kind(cursor: &mut Cursor<'_>, interner: &StringInterner, first: u8) -> TokenKind {
    let start = cursor.pos();
    if first.is_ascii_digit() {
        // Fixed-width accumulation: literals past u64::MAX wrap.
        let mut value: u64 = 0;
        while cursor.current().is_ascii_digit() {
            value = value
                .wrapping_mul(10)
                .wrapping_add(u64::from(cursor.current() - b'0'));
            cursor.advance();
        }
        TokenKind::Int(value)
    } else if is_name_start(first) {
        cursor.advance();
        cursor.eat_while(is_name_continue);
        TokenKind::Name(interner.intern(cursor.slice_from(start)))
    } else {
        cursor.advance();
        TokenKind::Byte(first)
    }
}
