//! Grammar productions, one method per level.

use lazi_ir::{TokenKind, TokenTag};
use lazi_stack::ensure_sufficient_stack;

use crate::{EvalError, Parser};

const PLUS: TokenTag = TokenTag::Byte(b'+');
const MINUS: TokenTag = TokenTag::Byte(b'-');
const STAR: TokenTag = TokenTag::Byte(b'*');
const SLASH: TokenTag = TokenTag::Byte(b'/');
const RPAREN: TokenTag = TokenTag::Byte(b')');

impl Parser<'_> {
    /// Parse and evaluate an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply parenthesized input cannot
    /// overflow the native stack.
    pub fn parse_expr(&mut self) -> Result<i64, EvalError> {
        ensure_sufficient_stack(|| self.parse_expr0())
    }

    /// `expr1 (('+' | '-') expr1)*`
    fn parse_expr0(&mut self) -> Result<i64, EvalError> {
        let mut value = self.parse_expr1()?;
        loop {
            if self.match_token(PLUS) {
                value = value.wrapping_add(self.parse_expr1()?);
            } else if self.match_token(MINUS) {
                value = value.wrapping_sub(self.parse_expr1()?);
            } else {
                return Ok(value);
            }
        }
    }

    /// `expr2 (('*' | '/') expr2)*`
    fn parse_expr1(&mut self) -> Result<i64, EvalError> {
        let mut value = self.parse_expr2()?;
        loop {
            if self.match_token(STAR) {
                value = value.wrapping_mul(self.parse_expr2()?);
            } else if self.is_token(SLASH) {
                let op = self.bump();
                let divisor = self.parse_expr2()?;
                if divisor == 0 {
                    return Err(EvalError::DivisionByZero { span: op.span });
                }
                // i64::MIN / -1 wraps to i64::MIN
                value = value.wrapping_div(divisor);
            } else {
                return Ok(value);
            }
        }
    }

    /// `'-' expr2 | expr3`
    fn parse_expr2(&mut self) -> Result<i64, EvalError> {
        if self.match_token(MINUS) {
            ensure_sufficient_stack(|| self.parse_expr2()).map(i64::wrapping_neg)
        } else {
            self.parse_expr3()
        }
    }

    /// `INT | '(' expr ')'`
    fn parse_expr3(&mut self) -> Result<i64, EvalError> {
        let token = *self.current();
        match token.kind {
            TokenKind::Int(value) => {
                self.bump();
                #[expect(
                    clippy::cast_possible_wrap,
                    reason = "literals are reinterpreted as two's complement bit patterns"
                )]
                let value = value as i64;
                Ok(value)
            }
            TokenKind::Byte(b'(') => {
                let open = self.bump();
                let value = self.parse_expr()?;
                if self.is_token(RPAREN) {
                    self.bump();
                    Ok(value)
                } else {
                    let found = self.current();
                    Err(EvalError::UnclosedParen {
                        found: found.tag(),
                        span: found.span,
                        open: open.span,
                    })
                }
            }
            _ => Err(EvalError::ExpectedOperand {
                found: token.tag(),
                span: token.span,
            }),
        }
    }
}
