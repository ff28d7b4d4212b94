//! Evaluation session.

use lazi_ir::{GrowBuffer, SharedInterner, Token};
use lazi_parse::EvalError;
use tracing::debug;

/// A run of lexing and evaluation sharing one string interner.
///
/// Names interned by any call stay valid, with the same identity, for the
/// session's whole lifetime. Cloning a session shares its interner.
#[derive(Clone, Default)]
pub struct Session {
    interner: SharedInterner,
}

impl Session {
    /// Create a session with a fresh interner.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    /// Evaluate one expression.
    pub fn evaluate(&self, source: &str) -> Result<i64, EvalError> {
        let result = lazi_parse::evaluate(source, &self.interner);
        if let Err(err) = &result {
            debug!(
                source,
                code = %err.code(),
                span = %err.span(),
                found = ?err.found(),
                syntax = err.is_syntax_error(),
                "evaluation failed"
            );
        }
        result
    }

    /// Lex one source text completely.
    pub fn lex(&self, source: &str) -> GrowBuffer<Token> {
        let tokens = lazi_lexer::lex_all(source, &self.interner);
        debug!(
            tokens = tokens.len(),
            interned = self.interner.len(),
            "lexed source"
        );
        tokens
    }
}
