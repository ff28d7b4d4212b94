//! Command implementations for the `lazi` binary.
//!
//! Each command writes results to `out` and diagnostics to `emitter`, and
//! returns how many inputs failed. Deciding the exit status is left to the
//! binary.

use std::io::{self, Write};

use lazi_diagnostic::emitter::DiagnosticEmitter;
use lazi_diagnostic::{Diagnostic, ErrorCode};
use lazi_ir::Span;
use lazi_lexer::{format_token, Lexer};
use lazi_lexer_core::SourceBuffer;

use crate::Session;

/// Expressions evaluated by `lazi demo`.
pub const DEMO_EXPRESSIONS: &[&str] = &["1+1", "4*(3+1)", "2*3+4*5", "-(1+2)", "10/3", "--5"];

/// Source tokenized by `lazi demo`.
pub const DEMO_LEX_SOURCE: &str = "XYZ+(XYZ)12345+994";

/// Warning for text after an interior NUL, which the lexer never reads.
fn truncation_warning(buf: &SourceBuffer) -> Option<Diagnostic> {
    let pos = buf.interior_nul()?;
    let ignored = buf.len() - pos;
    Some(
        Diagnostic::warning(ErrorCode::W1001)
            .with_label(Span::new(pos, buf.len()), "input ends here")
            .with_note(format!("{ignored} trailing bytes are ignored")),
    )
}

/// Evaluate each expression independently, printing `<expr> = <result>`.
///
/// A failing expression is reported and does not stop the rest.
pub fn eval_command<W: Write>(
    session: &Session,
    exprs: &[&str],
    out: &mut W,
    emitter: &mut dyn DiagnosticEmitter,
) -> io::Result<usize> {
    let mut failures = 0;
    for expr in exprs {
        if let Some(warning) = truncation_warning(&SourceBuffer::new(expr)) {
            emitter.emit(&warning, expr);
        }
        match session.evaluate(expr) {
            Ok(value) => writeln!(out, "{expr} = {value}")?,
            Err(err) => {
                failures += 1;
                emitter.emit(&err.to_diagnostic(), expr);
            }
        }
    }
    emitter.flush();
    Ok(failures)
}

/// Print every token of `source`, one per line.
pub fn lex_command<W: Write>(
    session: &Session,
    source: &str,
    out: &mut W,
    emitter: &mut dyn DiagnosticEmitter,
) -> io::Result<usize> {
    let buf = SourceBuffer::new(source);
    if let Some(warning) = truncation_warning(&buf) {
        emitter.emit(&warning, source);
        emitter.flush();
    }
    let interner = session.interner();
    for token in Lexer::new(&buf, interner) {
        writeln!(out, "{}", format_token(&token, &buf, interner))?;
    }
    Ok(0)
}

/// Run the built-in samples: the token dump, then every demo expression.
pub fn demo_command<W: Write>(
    session: &Session,
    out: &mut W,
    emitter: &mut dyn DiagnosticEmitter,
) -> io::Result<usize> {
    writeln!(out, "tokens of {DEMO_LEX_SOURCE}:")?;
    lex_command(session, DEMO_LEX_SOURCE, out, emitter)?;
    writeln!(out)?;
    eval_command(session, DEMO_EXPRESSIONS, out, emitter)
}
