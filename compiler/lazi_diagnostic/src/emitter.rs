//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support:
//!
//! ```text
//! error[E1003]: expected ')', found <ASCII 0>
//!  --> 1:5
//!   |
//! 1 | (1+2
//!   |     ^ expected ')'
//!  ::: 1:1
//!   |
//! 1 | (1+2
//!   | - unclosed '(' opened here
//! ```
//!
//! Each label gets its own snippet. Primary labels use `-->` and `^`,
//! secondary labels `:::` and `-`.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label, Severity};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Trait for diagnostic output sinks.
pub trait DiagnosticEmitter {
    /// Emit one diagnostic about `source`.
    fn emit(&mut self, diagnostic: &Diagnostic, source: &str);

    /// Flush any buffered output.
    fn flush(&mut self);
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color=` value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_header(&mut self, diagnostic: &Diagnostic) {
        let color = match diagnostic.severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        };
        self.write_colored(&diagnostic.severity.to_string(), color);
        self.write_colored(&format!("[{}]", diagnostic.code), colors::BOLD);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);
    }

    fn write_label(&mut self, label: &Label, source: &str, table: &LineOffsetTable) {
        let (line, col) = table.offset_to_line_col(source, label.span.start);
        let line_text = &source[table.line_range(source, line)];
        let gutter = " ".repeat(line.to_string().len());

        let marker = if label.is_primary { "-->" } else { ":::" };
        let _ = write!(self.writer, "{gutter}");
        self.write_colored(marker, colors::SECONDARY);
        let _ = writeln!(self.writer, " {line}:{col}");

        let _ = writeln!(self.writer, "{gutter} |");
        let _ = writeln!(self.writer, "{line} | {line_text}");

        let width = if label.span.is_empty() {
            1
        } else {
            source
                .get(label.span.start as usize..label.span.end as usize)
                .map_or(1, |text| text.chars().count())
        };
        let (underline_char, color) = if label.is_primary {
            ('^', colors::ERROR)
        } else {
            ('-', colors::SECONDARY)
        };
        let underline = underline_char.to_string().repeat(width);
        let padding = " ".repeat((col as usize).saturating_sub(1));
        let _ = write!(self.writer, "{gutter} | {padding}");
        self.write_colored(&format!("{underline} {}", label.message), color);
        let _ = writeln!(self.writer);
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr with explicit color mode.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic, source: &str) {
        self.write_header(diagnostic);

        let table = LineOffsetTable::build(source);
        for label in &diagnostic.labels {
            self.write_label(label, source, &table);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
