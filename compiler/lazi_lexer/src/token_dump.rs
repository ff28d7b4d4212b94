//! Human-readable token dump, one token per line.

use lazi_ir::{StringLookup, Token};
use lazi_lexer_core::SourceBuffer;

/// Render a token for debugging output.
///
/// Format: `[TOKEN: '+'] [LEXEME: +]`, followed by ` [VALUE: n]` for
/// integers and ` [NAME: s]` for identifiers.
pub fn format_token(token: &Token, source: &SourceBuffer, interner: &dyn StringLookup) -> String {
    let bytes = source.as_bytes();
    let start = (token.span.start as usize).min(bytes.len());
    let end = (token.span.end as usize).min(bytes.len());
    let lexeme = String::from_utf8_lossy(&bytes[start..end]);

    let mut out = format!("[TOKEN: {}] [LEXEME: {lexeme}]", token.tag());
    if let Some(value) = token.int_value() {
        out.push_str(&format!(" [VALUE: {value}]"));
    } else if let Some(name) = token.name() {
        out.push_str(&format!(" [NAME: {}]", interner.lookup(name)));
    }
    out
}
