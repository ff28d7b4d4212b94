//! Recursive-descent parser and evaluator for lazi.
//!
//! No tree is built: each grammar production returns the integer value of
//! the text it recognized.
//!
//! ```text
//! expr   := expr0
//! expr0  := expr1 (('+' | '-') expr1)*
//! expr1  := expr2 (('*' | '/') expr2)*
//! expr2  := '-' expr2 | expr3
//! expr3  := INT | '(' expr ')'
//! ```
//!
//! Binary levels are left-associative. Arithmetic is 64-bit two's
//! complement with wrapping; division truncates toward zero and a zero
//! divisor is an [`EvalError::DivisionByZero`].

mod error;
mod grammar;

pub use error::EvalError;

use lazi_ir::{StringInterner, Token, TokenTag};
use lazi_lexer::Lexer;
use lazi_lexer_core::SourceBuffer;
use tracing::debug;

/// Parser state: the lexer and its single token of lookahead.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    /// Create a parser over `source`, interning names through `interner`.
    pub fn new(source: &'a SourceBuffer, interner: &'a StringInterner) -> Self {
        Parser {
            lexer: Lexer::new(source, interner),
        }
    }

    /// The current token.
    #[inline]
    pub fn current(&self) -> &Token {
        self.lexer.peek()
    }

    /// Check if the current token has kind `tag`, without consuming it.
    #[inline]
    pub fn is_token(&self, tag: TokenTag) -> bool {
        self.current().tag() == tag
    }

    /// Consume the current token if it has kind `tag`.
    ///
    /// Returns whether it matched; on mismatch nothing changes.
    pub fn match_token(&mut self, tag: TokenTag) -> bool {
        if self.is_token(tag) {
            self.lexer.advance();
            true
        } else {
            false
        }
    }

    /// Consume the current token, which must have kind `tag`.
    pub fn expect_token(&mut self, tag: TokenTag) -> Result<Token, EvalError> {
        if self.is_token(tag) {
            Ok(self.lexer.advance())
        } else {
            let found = self.current();
            Err(EvalError::UnexpectedToken {
                expected: tag,
                found: found.tag(),
                span: found.span,
            })
        }
    }

    /// Consume the current token unconditionally.
    #[inline]
    fn bump(&mut self) -> Token {
        self.lexer.advance()
    }
}

/// Evaluate `source` as a single expression.
///
/// The whole input must be consumed: anything after a complete expression
/// is an [`EvalError::UnexpectedToken`] expecting end of input.
pub fn evaluate(source: &str, interner: &StringInterner) -> Result<i64, EvalError> {
    let buf = SourceBuffer::new(source);
    let mut parser = Parser::new(&buf, interner);
    let value = parser.parse_expr()?;
    parser.expect_token(TokenTag::EOF)?;
    debug!(source, value, "evaluated expression");
    Ok(value)
}

#[cfg(test)]
mod tests;
