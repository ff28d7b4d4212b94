//! Evaluation error types.
//!
//! Syntax errors (`E1xxx`) carry the offending token's kind and span;
//! [`EvalError::to_diagnostic`] turns any error into a renderable
//! [`Diagnostic`].

use lazi_diagnostic::{Diagnostic, ErrorCode};
use lazi_ir::{Span, TokenTag};

/// Everything that can go wrong evaluating an expression.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A specific token was required and something else was found.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: TokenTag,
        found: TokenTag,
        span: Span,
    },

    /// An operand position held neither an integer nor `(`.
    #[error("expected integer or '(', found {found}")]
    ExpectedOperand { found: TokenTag, span: Span },

    /// A parenthesized expression was not closed.
    #[error("expected ')', found {found}")]
    UnclosedParen {
        found: TokenTag,
        span: Span,
        /// Span of the matching `(`.
        open: Span,
    },

    /// The right operand of `/` evaluated to zero.
    #[error("division by zero")]
    DivisionByZero {
        /// Span of the `/` operator.
        span: Span,
    },
}

impl EvalError {
    /// Error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::UnexpectedToken { .. } => ErrorCode::E1001,
            EvalError::ExpectedOperand { .. } => ErrorCode::E1002,
            EvalError::UnclosedParen { .. } => ErrorCode::E1003,
            EvalError::DivisionByZero { .. } => ErrorCode::E6001,
        }
    }

    /// Primary source location.
    pub fn span(&self) -> Span {
        match self {
            EvalError::UnexpectedToken { span, .. }
            | EvalError::ExpectedOperand { span, .. }
            | EvalError::UnclosedParen { span, .. }
            | EvalError::DivisionByZero { span } => *span,
        }
    }

    /// Kind of the offending token, for syntax errors.
    pub fn found(&self) -> Option<TokenTag> {
        match self {
            EvalError::UnexpectedToken { found, .. }
            | EvalError::ExpectedOperand { found, .. }
            | EvalError::UnclosedParen { found, .. } => Some(*found),
            EvalError::DivisionByZero { .. } => None,
        }
    }

    /// Returns `true` if the input did not match the grammar.
    pub fn is_syntax_error(&self) -> bool {
        self.code().is_parser_error()
    }

    /// Convert to a diagnostic for rendering.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            EvalError::UnexpectedToken { expected, span, .. } => {
                diag.with_label(*span, format!("expected {expected}"))
            }
            EvalError::ExpectedOperand { span, .. } => {
                diag.with_label(*span, "expected an expression")
            }
            EvalError::UnclosedParen { span, open, .. } => diag
                .with_label(*span, "expected ')'")
                .with_secondary_label(*open, "unclosed '(' opened here"),
            EvalError::DivisionByZero { span } => diag
                .with_label(*span, "divisor evaluates to zero")
                .with_note("lazi integer division has no value for a zero divisor"),
        }
    }
}

#[cfg(test)]
mod tests;
